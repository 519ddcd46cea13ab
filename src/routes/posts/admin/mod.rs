pub(super) mod index;
pub(super) mod new;
