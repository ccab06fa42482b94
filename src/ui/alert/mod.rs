// SPDX-License-Identifier: MPL-2.0
//! Transient, auto-dismissing alert overlay.
//!
//! # Components
//!
//! - [`spec`]: `AlertSpec` describing what to show
//! - [`binding`]: host-owned visibility flag
//! - [`presenter`]: entry, timed or tapped dismissal, exit
//! - [`content`]: icon, title and subtitle on a frosted backing
//! - [`reveal`]: stroke-reveal checkmark and X-mark icons
//! - [`overlay`]: stacking the alert over a host view
//!
//! # Usage
//!
//! ```ignore
//! // Show: replace the content, raise the flag, let the presenter observe it.
//! self.alert = AlertSpec::complete(palette::SUCCESS_500, "Saved");
//! self.visible.set(true);
//! self.presenter.sync(&self.visible, Instant::now());
//!
//! // View
//! overlay::attach(
//!     host,
//!     &self.presenter,
//!     |appearance| content::view(&self.alert, appearance, BlurStyle::Regular),
//!     Message::Alert(alert::Message::Tapped),
//! )
//! ```

pub mod binding;
pub mod content;
pub mod motion;
pub mod overlay;
pub mod presenter;
pub mod reveal;
pub mod spec;

pub use binding::{Binding, Edge};
pub use content::{ContentLayout, IconRegion};
pub use motion::{Appearance, Spring};
pub use presenter::{Message, Phase, Presenter};
pub use reveal::{RevealProgress, Shape, StrokeReveal};
pub use spec::{AlertSpec, AlertVariant};
