//! # TUI Components
//!
//! All components are stateless and props-based: each frame they borrow
//! what they need from the current `ViewModel` and render it.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top bar: heading, spinner, status)
//! ├── recipe_list.rs    (one collection page)
//! ├── recipe_detail.rs  (one recipe, wrapped)
//! ├── recipe_form.rs    (create / edit fields)
//! └── dialog.rs         (confirm + error overlays)
//! ```

mod dialog;
mod recipe_detail;
mod recipe_form;
mod recipe_list;
mod title_bar;

pub use dialog::{ConfirmDialog, ErrorDialog};
pub use recipe_detail::RecipeDetail;
pub use recipe_form::RecipeForm;
pub use recipe_list::RecipeList;
pub use title_bar::TitleBar;
