pub mod application {
    pub mod backup {
        pub mod clear_all;
        pub mod export;
        pub mod restore;
    }
    pub mod comparison {
        pub mod compare;
        pub mod dashboard;
        pub mod history;
    }
    pub mod distributor {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod import {
        pub mod import_catalog;
        pub mod import_prices;
    }
    pub mod price {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_product;
        pub mod update;
    }
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod update;
    }
    pub mod shopping_item {
        pub mod add_product;
        pub mod clear;
        pub mod delete;
        pub mod get_all;
        pub mod save_prices;
        pub mod update;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod backup {
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod clear_all;
            pub mod export;
            pub mod restore;
        }
    }
    pub mod comparison {
        pub mod analysis;
        pub mod errors;
        pub mod model;
        pub mod use_cases {
            pub mod compare;
            pub mod dashboard;
            pub mod history;
        }
    }
    pub mod distributor {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod import {
        pub mod batch;
        pub mod columns;
        pub mod errors;
        pub mod inspect;
        pub mod model;
        pub mod price_parser;
        pub mod reconcile;
        pub mod rows;
        pub mod use_cases {
            pub mod import_catalog;
            pub mod import_prices;
        }
    }
    pub mod price {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_product;
            pub mod update;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod update;
        }
    }
    pub mod shared {
        pub mod text;
    }
    pub mod shopping_item {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod add_product;
            pub mod clear;
            pub mod delete;
            pub mod get_all;
            pub mod save_prices;
            pub mod update;
        }
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
