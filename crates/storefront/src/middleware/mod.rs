mod product_form;
mod validate;

pub use self::product_form::ProductForm;
pub use self::validate::SimpleValidatedJson;
