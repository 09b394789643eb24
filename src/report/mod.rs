mod delivery;
pub(crate) mod picture;
mod text;

pub(crate) use delivery::ImageArtifact;
pub(crate) use text::render_text;
