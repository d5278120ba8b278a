pub mod build;
pub mod component;
pub mod inventory;
pub mod social;

pub use build::{Build, BuildId, BuildLine, BuildUpdate, NewBuild, UserId};
pub use component::{Category, Component, ComponentId, SpecValueError, Specifications};
pub use inventory::{stock_status, AlertId, AlertStatus, InventoryAlert, PricePoint, StockChange};
pub use social::{Comment, CommentId, Like, Notification, NotificationId, NotificationKind};
