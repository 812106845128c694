//! Uploaded image storage
//!
//! Holds the shared back image and the ordered list of face images. Face ids
//! are reassigned `0..n` whenever the face list is replaced, matching the
//! order the files were uploaded in.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::MIN_FACE_IMAGES;
use crate::types::{ImageAsset, ImageId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRegistry {
    back: Option<ImageAsset>,
    faces: Vec<ImageAsset>,
}

impl ImageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image shown on every card's back
    pub fn set_back(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.back = Some(ImageAsset::new(ImageId(0), name, bytes));
    }

    pub fn back(&self) -> Option<&ImageAsset> {
        self.back.as_ref()
    }

    /// Append a face image, returning its id
    pub fn add_face(&mut self, name: impl Into<String>, bytes: Vec<u8>) -> ImageId {
        let id = ImageId(self.faces.len() as u32);
        self.faces.push(ImageAsset::new(id, name, bytes));
        id
    }

    /// Replace the whole face list
    pub fn set_faces<I, S>(&mut self, files: I)
    where
        I: IntoIterator<Item = (S, Vec<u8>)>,
        S: Into<String>,
    {
        self.faces.clear();
        for (name, bytes) in files {
            self.add_face(name, bytes);
        }
    }

    pub fn clear_faces(&mut self) {
        self.faces.clear();
    }

    pub fn faces(&self) -> &[ImageAsset] {
        &self.faces
    }

    pub fn face(&self, id: ImageId) -> Option<&ImageAsset> {
        self.faces.get(id.0 as usize)
    }

    pub fn face_ids(&self) -> impl Iterator<Item = ImageId> + '_ {
        self.faces.iter().map(|f| f.id)
    }

    /// Whether setup has what it needs to start pairing
    pub fn is_ready(&self) -> bool {
        self.back.is_some() && self.faces.len() >= MIN_FACE_IMAGES
    }

    /// Drop every image
    pub fn clear(&mut self) {
        self.back = None;
        self.faces.clear();
    }
}
