//! Product upload flow.

use crate::storage::{product_file_path, product_image_path, StorageClient};
use crate::AppError;
use maker_auth::AuthClient;
use maker_commerce::{Category, Product};
use maker_events::{EventBus, Topic};
use maker_records::RecordStore;
use serde_json::Value;

/// States of the upload flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UploadState {
    /// Collecting form input.
    #[default]
    Editing,
    /// Checking the draft on submission.
    Validating,
    /// Handing files to the storage collaborator.
    Uploading,
    /// The product was created and the form reset.
    Succeeded,
    /// A collaborator call failed; the record store was not touched.
    Failed,
}

/// A file the creator attached to the form.
#[derive(Debug, Clone, PartialEq)]
pub struct FileAttachment {
    /// Original file name.
    pub name: String,
    /// File content.
    pub bytes: Vec<u8>,
}

impl FileAttachment {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

/// The upload form's working state.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    /// Product title.
    pub title: String,
    /// Product description.
    pub description: String,
    /// Price as entered, parsed on submit.
    pub price: String,
    /// Selected category.
    pub category: Option<Category>,
    /// Whether the product should be featured.
    pub featured: bool,
    /// The deliverable file (required).
    pub product_file: Option<FileAttachment>,
    /// Optional cover image.
    pub image_file: Option<FileAttachment>,
}

/// The creator upload flow: `Editing -> Validating -> Uploading ->
/// {Succeeded, Failed}`.
///
/// Submission validates the draft in a fixed order, delegates the file (and
/// optional image) to the storage collaborator, appends the new record to
/// the store, and broadcasts a created event — in that order, so every
/// subscriber has run before the caller sees the reset form.
pub struct UploadFlow {
    draft: ProductDraft,
    state: UploadState,
    store: RecordStore<Product>,
    bus: EventBus,
}

impl UploadFlow {
    /// Create a flow over the shared store and bus.
    pub fn new(store: RecordStore<Product>, bus: EventBus) -> Self {
        Self {
            draft: ProductDraft::default(),
            state: UploadState::Editing,
            store,
            bus,
        }
    }

    /// Current flow state.
    pub fn state(&self) -> UploadState {
        self.state
    }

    /// Read the draft.
    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    /// Edit the draft. Touching the form after a submission outcome resumes
    /// editing.
    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        if matches!(self.state, UploadState::Succeeded | UploadState::Failed) {
            self.state = UploadState::Editing;
        }
        &mut self.draft
    }

    /// Validate the draft in submission order, returning the parsed price.
    ///
    /// The first failing check wins; no partial submission is possible.
    fn validate(&self) -> Result<(f64, Category, &FileAttachment), AppError> {
        if self.draft.title.trim().is_empty() {
            return Err(AppError::Validation("Please enter a product title.".into()));
        }
        if self.draft.description.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter a product description.".into(),
            ));
        }
        let price: f64 = self
            .draft
            .price
            .trim()
            .parse()
            .map_err(|_| AppError::Validation("Please enter a valid price.".into()))?;
        if !price.is_finite() || price < 0.0 {
            return Err(AppError::Validation("Please enter a valid price.".into()));
        }
        let category = self
            .draft
            .category
            .ok_or_else(|| AppError::Validation("Please select a category.".into()))?;
        let file = self
            .draft
            .product_file
            .as_ref()
            .ok_or_else(|| AppError::Validation("Please upload your product file.".into()))?;
        Ok((price, category, file))
    }

    /// Submit the draft.
    ///
    /// On success the created product has been persisted, the created event
    /// has already reached every subscriber, and the form is back to its
    /// initial state. On failure the record store is untouched; an image
    /// uploaded before a later step failed is left orphaned (no cleanup
    /// pass exists for it).
    pub async fn submit(
        &mut self,
        auth: &dyn AuthClient,
        storage: &dyn StorageClient,
    ) -> Result<Product, AppError> {
        self.state = UploadState::Validating;
        let (price, category, file) = match self.validate() {
            Ok(checked) => checked,
            Err(e) => {
                self.state = UploadState::Editing;
                return Err(e);
            }
        };
        let file = file.clone();

        self.state = UploadState::Uploading;
        let result = self
            .upload_and_persist(auth, storage, price, category, &file)
            .await;

        match result {
            Ok(product) => {
                self.draft = ProductDraft::default();
                self.state = UploadState::Succeeded;
                Ok(product)
            }
            Err(e) => {
                tracing::error!(error = %e, "product upload failed");
                self.state = UploadState::Failed;
                Err(e)
            }
        }
    }

    async fn upload_and_persist(
        &self,
        auth: &dyn AuthClient,
        storage: &dyn StorageClient,
        price: f64,
        category: Category,
        file: &FileAttachment,
    ) -> Result<Product, AppError> {
        let user = auth.me().await?;

        let stored_file = storage
            .upload(&file.bytes, &product_file_path(&user.id, &file.name), true)
            .await?;

        let mut image_url = None;
        if let Some(image) = &self.draft.image_file {
            let stored_image = storage
                .upload(
                    &image.bytes,
                    &product_image_path(&user.id, &image.name),
                    true,
                )
                .await?;
            image_url = Some(stored_image.public_url);
        }

        let mut product = Product::new(
            self.draft.title.clone(),
            self.draft.description.clone(),
            price,
            category,
            user.id,
        )
        .with_file_url(stored_file.public_url)
        .with_featured(self.draft.featured);
        product.image_url = image_url;

        // Read-modify-write; not transactional. Two rapid mutations from
        // different views can race and the last save wins.
        let mut records = self.store.load();
        records.push(product.clone());
        self.store.save(&records)?;

        tracing::info!(product_id = %product.id, "product created");
        self.bus.publish(
            Topic::ProductCreated,
            serde_json::to_value(&product).unwrap_or(Value::Null),
        );

        Ok(product)
    }
}
