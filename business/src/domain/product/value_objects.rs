use serde::{Deserialize, Serialize};

/// Regulatory class of a medication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Referencia,
    #[default]
    Generico,
    Similar,
    Fitoterapico,
    Outros,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Referencia => write!(f, "referencia"),
            ProductCategory::Generico => write!(f, "generico"),
            ProductCategory::Similar => write!(f, "similar"),
            ProductCategory::Fitoterapico => write!(f, "fitoterapico"),
            ProductCategory::Outros => write!(f, "outros"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "referencia" => Ok(ProductCategory::Referencia),
            "generico" => Ok(ProductCategory::Generico),
            "similar" => Ok(ProductCategory::Similar),
            "fitoterapico" => Ok(ProductCategory::Fitoterapico),
            "outros" => Ok(ProductCategory::Outros),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

/// Selling unit: box, unit, flask, ampoule, envelope, tube.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductUnit {
    #[default]
    Cx,
    Un,
    Fr,
    Amp,
    Env,
    Tb,
}

impl std::fmt::Display for ProductUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductUnit::Cx => write!(f, "cx"),
            ProductUnit::Un => write!(f, "un"),
            ProductUnit::Fr => write!(f, "fr"),
            ProductUnit::Amp => write!(f, "amp"),
            ProductUnit::Env => write!(f, "env"),
            ProductUnit::Tb => write!(f, "tb"),
        }
    }
}

impl std::str::FromStr for ProductUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cx" => Ok(ProductUnit::Cx),
            "un" => Ok(ProductUnit::Un),
            "fr" => Ok(ProductUnit::Fr),
            "amp" => Ok(ProductUnit::Amp),
            "env" => Ok(ProductUnit::Env),
            "tb" => Ok(ProductUnit::Tb),
            _ => Err(format!("Invalid product unit: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_what_it_displays() {
        for category in [
            ProductCategory::Referencia,
            ProductCategory::Generico,
            ProductCategory::Similar,
            ProductCategory::Fitoterapico,
            ProductCategory::Outros,
        ] {
            assert_eq!(category.to_string().parse::<ProductCategory>(), Ok(category));
        }
        for unit in [
            ProductUnit::Cx,
            ProductUnit::Un,
            ProductUnit::Fr,
            ProductUnit::Amp,
            ProductUnit::Env,
            ProductUnit::Tb,
        ] {
            assert_eq!(unit.to_string().parse::<ProductUnit>(), Ok(unit));
        }
    }

    #[test]
    fn should_default_to_generic_box() {
        assert_eq!(ProductCategory::default(), ProductCategory::Generico);
        assert_eq!(ProductUnit::default(), ProductUnit::Cx);
    }

    #[test]
    fn should_reject_unknown_values() {
        assert!("tablet".parse::<ProductUnit>().is_err());
        assert!("generic".parse::<ProductCategory>().is_err());
    }
}
