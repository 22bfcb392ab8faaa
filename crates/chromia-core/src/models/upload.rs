use uuid::Uuid;

/// An uploaded image held by the request handler until it is written to the
/// temporary upload directory.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub id: Uuid,
    pub original_filename: String,
    pub data: Vec<u8>,
}

impl UploadedImage {
    /// Wrap the payload with a freshly generated random identifier.
    pub fn new(original_filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            original_filename: original_filename.into(),
            data,
        }
    }

    /// Name of the temporary file: `<uuid>_<original filename>`.
    pub fn storage_key(&self) -> String {
        format!("{}_{}", self.id, self.original_filename)
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
