//! View-layer building blocks: surfaces, navigation chrome, the [`View`]
//! contract, and the loading capability with its default implementation.

mod animatable;
mod loading;
mod nav;
mod surface;
mod view;

pub use animatable::{LoadingAnimatable, LoadingViewRef};
pub use loading::{ActivityIndicator, Label, LoadingView};
pub use nav::{Action, NavigationItem};
pub use surface::Surface;
pub use view::{View, ViewRef};
