//! MongoDB item repository using the synchronous driver.

use inventory_core::{
    application::{ApplicationError, ports::ItemRepository},
    domain::{Item, ItemId},
    error::{InventoryError, InventoryResult},
};
use mongodb::{
    bson::{Bson, Document, doc},
    sync::{Client, Collection},
};
use tracing::{debug, instrument};

use super::MongoSettings;

const FIELD_ID: &str = "id";
const FIELD_NAME: &str = "name";
const FIELD_QUANTITY: &str = "quantity";
const FIELD_PRICE: &str = "price";
const FIELD_DESCRIPTION: &str = "description";

/// Production repository backed by one MongoDB collection.
///
/// Items are stored as flat documents keyed by the `id` field (not `_id`).
#[derive(Debug, Clone)]
pub struct MongoItemRepository {
    collection: Collection<Document>,
}

impl MongoItemRepository {
    /// Connect to the server described by `settings` and check it answers.
    #[instrument(skip_all, fields(address = %settings.address()))]
    pub fn connect(settings: &MongoSettings) -> InventoryResult<Self> {
        let connection_error = |e: mongodb::error::Error| ApplicationError::Connection {
            address: settings.address(),
            reason: e.to_string(),
        };

        let client = Client::with_uri_str(settings.uri()).map_err(connection_error)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .run()
            .map_err(connection_error)?;

        debug!(
            database = %settings.database,
            collection = %settings.collection,
            "Connected to MongoDB"
        );
        Ok(Self::from_client(
            &client,
            &settings.database,
            &settings.collection,
        ))
    }

    /// Use an already configured client.
    pub fn from_client(client: &Client, database: &str, collection: &str) -> Self {
        Self {
            collection: client.database(database).collection(collection),
        }
    }
}

impl ItemRepository for MongoItemRepository {
    #[instrument(skip_all)]
    fn find_all(&self) -> InventoryResult<Vec<Item>> {
        let cursor = self
            .collection
            .find(Document::new())
            .run()
            .map_err(|e| persistence("find_all", e))?;

        cursor
            .map(|document| {
                document
                    .map_err(|e| InventoryError::from(persistence("find_all", e)))
                    .and_then(|document| document_to_item(&document))
            })
            .collect()
    }

    #[instrument(skip_all, fields(id = %id))]
    fn find_by_id(&self, id: &ItemId) -> InventoryResult<Option<Item>> {
        self.collection
            .find_one(id_filter(id))
            .run()
            .map_err(|e| persistence("find_by_id", e))?
            .map(|document| document_to_item(&document))
            .transpose()
    }

    #[instrument(skip_all, fields(id = %item.id()))]
    fn save(&self, item: &Item) -> InventoryResult<()> {
        self.collection
            .insert_one(item_to_document(item))
            .run()
            .map_err(|e| persistence("save", e))?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %item.id()))]
    fn update(&self, item: &Item) -> InventoryResult<()> {
        self.collection
            .update_one(id_filter(item.id()), set_fields(item))
            .run()
            .map_err(|e| persistence("update", e))?;
        Ok(())
    }

    #[instrument(skip_all, fields(id = %id))]
    fn delete(&self, id: &ItemId) -> InventoryResult<()> {
        self.collection
            .delete_one(id_filter(id))
            .run()
            .map_err(|e| persistence("delete", e))?;
        Ok(())
    }
}

// ── Document mapping ──────────────────────────────────────────────────────────

fn persistence(operation: &'static str, error: mongodb::error::Error) -> ApplicationError {
    ApplicationError::Persistence {
        operation,
        reason: error.to_string(),
    }
}

fn id_filter(id: &ItemId) -> Document {
    let mut filter = Document::new();
    filter.insert(FIELD_ID, id.as_str());
    filter
}

/// Every field except the identifier.
fn value_fields(item: &Item) -> Document {
    let mut fields = Document::new();
    fields.insert(FIELD_NAME, item.name());
    fields.insert(FIELD_QUANTITY, item.quantity());
    fields.insert(FIELD_PRICE, item.price());
    fields.insert(FIELD_DESCRIPTION, item.description());
    fields
}

fn item_to_document(item: &Item) -> Document {
    let mut document = id_filter(item.id());
    for (key, value) in value_fields(item) {
        document.insert(key, value);
    }
    document
}

fn set_fields(item: &Item) -> Document {
    let mut update = Document::new();
    update.insert("$set", value_fields(item));
    update
}

fn document_to_item(document: &Document) -> InventoryResult<Item> {
    let id = text(field(document, FIELD_ID, None)?);
    let known = Some(id.as_str());

    let name = text(field(document, FIELD_NAME, known)?);
    let quantity = integer(field(document, FIELD_QUANTITY, known)?)
        .ok_or_else(|| malformed(known, format!("'{FIELD_QUANTITY}' is not a number")))?;
    let price = number(field(document, FIELD_PRICE, known)?)
        .ok_or_else(|| malformed(known, format!("'{FIELD_PRICE}' is not a number")))?;
    let description = text(field(document, FIELD_DESCRIPTION, known)?);

    Ok(Item::new(id, name, quantity, price, description))
}

fn field<'a>(
    document: &'a Document,
    key: &'static str,
    id: Option<&str>,
) -> InventoryResult<&'a Bson> {
    document
        .get(key)
        .ok_or_else(|| malformed(id, format!("missing field '{key}'")).into())
}

fn malformed(id: Option<&str>, reason: String) -> ApplicationError {
    ApplicationError::MalformedRecord {
        id: id.map(str::to_owned),
        reason,
    }
}

/// Strings verbatim; anything else in its display form.
fn text(value: &Bson) -> String {
    match value {
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Any numeric BSON type, truncated to a 32-bit quantity.
fn integer(value: &Bson) -> Option<i32> {
    match value {
        Bson::Int32(n) => Some(*n),
        Bson::Int64(n) => Some(*n as i32),
        Bson::Double(n) => Some(*n as i32),
        _ => None,
    }
}

fn number(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}
