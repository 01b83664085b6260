//! A small terminal DOM.
//!
//! Build an [`Element`] tree tagged with class names, describe how classes
//! look in a [`Stylesheet`], then [`layout`](layout::layout) and
//! [`render`](render::render_to_buffer) it, usually through [`Terminal`].
//! Input arrives as [`Event`]s from [`FocusState::process_events`] and is
//! routed to element handlers by [`HandlerRegistry`], to hover transitions
//! by [`HoverState`], and to scoped key listeners by [`ListenerRegistry`].

pub mod buffer;
pub mod dispatch;
pub mod element;
pub mod event;
pub mod focus;
pub mod hit;
pub mod hover;
pub mod layout;
pub mod listener;
pub mod render;
pub mod stylesheet;
pub mod terminal;
pub mod text;
pub mod types;

pub use buffer::{Buffer, Cell};
pub use dispatch::{EventContext, EventKind, HandlerRegistry, Propagation};
pub use element::{collect_focusable, find_element, path_to, Content, Element};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use focus::FocusState;
pub use hit::{hit_test, hit_test_any, hit_test_focusable};
pub use hover::{HoverEvent, HoverState};
pub use layout::{layout, LayoutResult, Rect};
pub use listener::{ListenerRegistry, Subscription};
pub use render::render_to_buffer;
pub use stylesheet::{Selector, Stylesheet};
pub use terminal::Terminal;
pub use types::*;
