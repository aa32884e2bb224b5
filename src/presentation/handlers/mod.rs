mod health;
mod root;
mod upload;
mod upload_form;

pub use health::health_handler;
pub use root::{WELCOME_MESSAGE, root_handler};
pub use upload::{UPLOAD_SUCCESS_MESSAGE, upload_handler};
pub use upload_form::{FieldContract, UploadForm};
