pub mod backend;
pub mod db;
pub mod distributor {
    pub mod entity;
    pub mod repository;
}
pub mod local {
    pub mod distributor;
    pub mod price;
    pub mod product;
    pub mod shopping_item;
    pub mod store;
}
pub mod price {
    pub mod entity;
    pub mod repository;
}
pub mod product {
    pub mod entity;
    pub mod repository;
}
pub mod shopping_item {
    pub mod entity;
    pub mod repository;
}
