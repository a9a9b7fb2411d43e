//! 产品目录：模型、表单、存储、处理器、页面和路由

pub mod form;
pub mod handler;
pub mod model;
pub mod routes;
pub mod store;
pub mod view;

pub use form::{FormErrors, ProductForm};
pub use model::{NewProduct, Product};
pub use routes::product_routes;
pub use store::{seed_if_empty, MemoryProductStore, ProductStore};
