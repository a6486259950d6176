use crate::slideshow::ImageEntry;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Action {
    RefreshImages,
    Quit,
}

#[derive(Debug)]
pub enum AppEvent {
    ImagesLoaded(Vec<ImageEntry>),
    CycleImage,
    QrReady(PathBuf),
    Error(String),
    Status(String),
}
