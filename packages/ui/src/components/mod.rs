//! Shared building blocks used by every view.

mod button;
mod dialog;
mod display;
mod form;
mod tabs;

pub use button::{Button, ButtonVariant, PendingButton};
pub use dialog::{ConfirmDialog, Dialog, ModalOverlay};
pub use display::{Badge, BadgeVariant, Card, EmptyState, ErrorState, Skeleton, SkeletonGrid};
pub use form::{Field, Input, Label, SearchInput, Select, Textarea};
pub use tabs::Tabs;

pub use dioxus_primitives::toast::{use_toast, ToastOptions, ToastProvider, Toasts};
