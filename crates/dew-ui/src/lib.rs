//! Editor widgets built on the dew renderer.
//!
//! Widgets own their behavior and expose a `render` producing virtual
//! nodes; they reach their live nodes through ref callbacks captured at
//! render time. Wiring between widgets goes through [`EventEmitter`]
//! subscriptions, which the owning composite disposes when it is torn
//! down.

pub mod app;
pub mod events;
pub mod panel;
pub mod text_area;
pub mod text_box;
pub mod toolbar;

pub use app::App;
pub use events::{Disposable, EventEmitter, Subscription};
pub use panel::Panel;
pub use text_area::TextArea;
pub use text_box::TextBox;
pub use toolbar::Toolbar;
