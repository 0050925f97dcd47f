pub mod error;
pub mod tags;
pub mod health {
    pub mod routes;
}
pub mod product {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
pub mod store {
    pub mod dto;
    pub mod routes;
}
pub mod suggestion {
    pub mod dto;
    pub mod error_mapper;
    pub mod routes;
}
