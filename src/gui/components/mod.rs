pub mod reset_dialog;
pub mod section_list;

pub use reset_dialog::ResetDialog;
pub use section_list::SectionAction;
