pub mod error;
pub mod tags;
pub mod backup {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod comparison {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod distributor {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod health {
    pub mod routes;
}
pub mod import {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod price {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod shopping_item {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
