pub mod user_logo;

pub use user_logo::{UserLogo, name_color};
