pub use super::customer::Entity as Customer;
pub use super::customer_address::Entity as CustomerAddress;
pub use super::email_registration::Entity as EmailRegistration;
pub use super::plan::Entity as Plan;
pub use super::tray_config::Entity as TrayConfig;
pub use super::user_link::Entity as UserLink;
