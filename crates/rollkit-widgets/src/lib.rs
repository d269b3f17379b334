#![forbid(unsafe_code)]

//! Widgets: the self-advancing carousel.
//!
//! # Role in rollkit
//! This crate holds the only stateful piece of rollkit, the [`Carousel`].
//! It is deterministic: time enters only through [`Carousel::tick`], and
//! drawing leaves only through a [`TransitionSurface`].

pub mod carousel;
pub mod listener;
pub mod surface;
pub mod timer;

pub use carousel::{ActiveTransition, Carousel, CarouselPhase, ChildEntry, ChildProvider};
pub use listener::{
    CarouselControl, ChangeEvent, ChangeListener, ClickEvent, ClickListener, ListenerId,
    RunRequest,
};
pub use surface::{NullSurface, RecordingSurface, SurfaceCall, TransitionSurface};
pub use timer::TimerHandle;
