pub mod animation;
pub mod element;
pub mod event;
pub mod measure;
pub mod render;
pub mod terminal;
pub mod text;
pub mod transitions;
pub mod types;

pub use animation::AnimationState;
pub use element::{
    ancestors, closest, find_element, find_element_mut, query_class, visit_class_mut, Content,
    Element,
};
pub use event::{Event, Key, Modifiers, MouseButton};
pub use measure::natural_height;
pub use render::{render_lines, Frame, Line, Span};
pub use terminal::Terminal;
pub use transitions::{Easing, TransitionConfig, Transitions};
pub use types::*;
