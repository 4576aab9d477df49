mod catalog;
mod container;
mod dimension;
mod instance;
mod item;
mod layout;
mod metrics;
mod placement;

#[doc(inline)]
pub use catalog::Catalog;

#[doc(inline)]
pub use container::Container;

#[doc(inline)]
pub use dimension::Dimension;

#[doc(inline)]
pub use instance::Instance;

#[doc(inline)]
pub use item::Item;

#[doc(inline)]
pub use item::ItemClass;

#[doc(inline)]
pub use layout::Layout;

#[doc(inline)]
pub use layout::LayoutSignature;

#[doc(inline)]
pub use metrics::FILL_RATIO_DECIMALS;

#[doc(inline)]
pub use metrics::Metrics;

#[doc(inline)]
pub use placement::Placement;
