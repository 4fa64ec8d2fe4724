pub mod create_campaign;
pub mod delete_campaign;
pub mod donate;
pub mod initialize;
pub mod update_campaign;
pub mod update_platform_settings;
pub mod withdraw;

pub use create_campaign::*;
pub use delete_campaign::*;
pub use donate::*;
pub use initialize::*;
pub use update_campaign::*;
pub use update_platform_settings::*;
pub use withdraw::*;
