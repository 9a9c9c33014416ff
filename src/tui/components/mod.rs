//! # TUI Components
//!
//! Every visible piece of the form is a component here.
//!
//! ### Stateless (props in, pixels out)
//! - `TitleBar`: app name and busy status
//! - `TonePicker`: radio list of tones; selection lives in `App`
//! - `GenerateButton`: submit affordance with spinner
//! - `Toast`: transient notification overlay
//!
//! ### Stateful (own state, emit events)
//! - `TextField`: editable buffer + caret, used for URL and received text
//! - `ResponsePanel`: scrollable reply view (`ResponsePanelState` persists)
//!
//! Components receive data as props instead of reading `App` directly, so
//! each one can be rendered against a `TestBackend` in isolation.
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs
//! ├── text_field/        (editable text, wrap + caret helpers)
//! ├── tone_picker.rs
//! ├── generate_button.rs
//! ├── response_panel.rs
//! └── toast.rs
//! ```

pub mod generate_button;
pub mod response_panel;
pub mod text_field;
pub mod title_bar;
pub mod toast;
pub mod tone_picker;

pub use generate_button::GenerateButton;
pub use response_panel::{ResponsePanel, ResponsePanelState};
pub use text_field::{FieldEvent, TextField};
pub use title_bar::TitleBar;
pub use toast::Toast;
pub use tone_picker::{ToneEvent, TonePicker};
