//! Item Controller - mediates between storage and display.
//!
//! Every mutating use case follows the same shape:
//! 1. Look the identifier up in the repository
//! 2. On a rule violation, notify the view's error path and stop
//! 3. Otherwise mutate the repository, then notify the view
//!
//! Repository failures propagate to the caller untouched.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{InventoryView, ItemRepository},
    domain::Item,
    error::InventoryResult,
};

/// Controller enforcing one item per identifier.
///
/// `add`, `update` and `delete` share a single guard so at most one of them
/// runs at a time, whichever thread calls in. `list` takes no guard and may
/// interleave with a mutation; its snapshot can be stale by the time it is
/// displayed.
pub struct ItemController {
    repository: Box<dyn ItemRepository>,
    view: Box<dyn InventoryView>,
    mutation_guard: Mutex<()>,
}

impl ItemController {
    /// Create a new controller over the given adapters.
    pub fn new(repository: Box<dyn ItemRepository>, view: Box<dyn InventoryView>) -> Self {
        Self {
            repository,
            view,
            mutation_guard: Mutex::new(()),
        }
    }

    /// Display every stored item, in storage order.
    #[instrument(skip_all)]
    pub fn list(&self) -> InventoryResult<()> {
        let items = self.repository.find_all()?;
        debug!(count = items.len(), "Items loaded");
        self.view.display_items(items);
        Ok(())
    }

    /// Store a new item unless its identifier is already taken.
    ///
    /// On a duplicate the error message refers to the item already stored,
    /// not the rejected one.
    #[instrument(skip_all, fields(id = %item.id()))]
    pub fn add(&self, item: &Item) -> InventoryResult<()> {
        let _guard = self.lock();

        if let Some(existing) = self.repository.find_by_id(item.id())? {
            info!("Rejected add: identifier already in use");
            self.view.show_error_message(
                &format!("Already existing item with id {}", item.id()),
                &existing,
            );
            return Ok(());
        }

        self.repository.save(item)?;
        info!("Item added");
        self.view.add_item(item);
        Ok(())
    }

    /// Overwrite the item stored under `item.id()`.
    #[instrument(skip_all, fields(id = %item.id()))]
    pub fn update(&self, item: &Item) -> InventoryResult<()> {
        let _guard = self.lock();

        if self.repository.find_by_id(item.id())?.is_none() {
            self.reject_missing(item);
            return Ok(());
        }

        self.repository.update(item)?;
        info!("Item updated");
        self.view.update_item(item);
        Ok(())
    }

    /// Remove the item stored under `item.id()`.
    ///
    /// The view is told about `item` itself, not a re-fetched copy.
    #[instrument(skip_all, fields(id = %item.id()))]
    pub fn delete(&self, item: &Item) -> InventoryResult<()> {
        let _guard = self.lock();

        if self.repository.find_by_id(item.id())?.is_none() {
            self.reject_missing(item);
            return Ok(());
        }

        self.repository.delete(item.id())?;
        info!("Item deleted");
        self.view.delete_item(item);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn reject_missing(&self, item: &Item) {
        info!("Rejected: no item with this identifier");
        self.view
            .show_error_message(&format!("No existing item with id {}", item.id()), item);
    }

    /// The guard protects no data, so a poisoned lock is simply taken over.
    fn lock(&self) -> MutexGuard<'_, ()> {
        self.mutation_guard
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc, Mutex, MutexGuard,
        mpsc::{self, Receiver, Sender},
    };
    use std::thread;
    use std::time::Duration;

    use mockall::{Sequence, predicate::eq};

    use super::*;
    use crate::{
        application::{
            ApplicationError,
            ports::{ItemRepository, MockInventoryView, MockItemRepository},
        },
        domain::ItemId,
        error::InventoryError,
    };

    fn laptop() -> Item {
        Item::new("1", "Laptop", 10, 999.99, "High-end gaming laptop")
    }

    fn controller(repository: MockItemRepository, view: MockInventoryView) -> ItemController {
        ItemController::new(Box::new(repository), Box::new(view))
    }

    fn persistence_failure(operation: &'static str) -> InventoryError {
        ApplicationError::Persistence {
            operation,
            reason: "connection reset".into(),
        }
        .into()
    }

    // ── list ──────────────────────────────────────────────────────────────

    #[test]
    fn list_forwards_exact_sequence() {
        let items = vec![
            Item::new("2", "Mobile", 5, 899.9, "Gaming Phone"),
            Item::new("1", "Laptop", 10, 999.9, "Simple Laptop"),
        ];
        let returned = items.clone();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_all()
            .times(1)
            .returning(move || Ok(returned.clone()));

        let mut view = MockInventoryView::new();
        view.expect_display_items()
            .withf(move |shown| {
                *shown == items
                    && shown.iter().map(|i| i.id().as_str()).eq(["2", "1"])
            })
            .times(1)
            .return_const(());

        controller(repository, view).list().unwrap();
    }

    #[test]
    fn list_with_empty_store_displays_empty_list() {
        let mut repository = MockItemRepository::new();
        repository.expect_find_all().returning(|| Ok(Vec::new()));

        let mut view = MockInventoryView::new();
        view.expect_display_items()
            .with(eq(Vec::<Item>::new()))
            .times(1)
            .return_const(());

        controller(repository, view).list().unwrap();
    }

    #[test]
    fn list_propagates_persistence_failure_without_display() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_find_all()
            .returning(|| Err(persistence_failure("find_all")));

        let view = MockInventoryView::new();

        let err = controller(repository, view).list().unwrap_err();
        assert_eq!(err, persistence_failure("find_all"));
    }

    // ── add ───────────────────────────────────────────────────────────────

    #[test]
    fn add_new_item_saves_then_notifies() {
        let item = laptop();
        let mut seq = Sequence::new();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(ItemId::from("1")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(None));
        repository
            .expect_save()
            .with(eq(item.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut view = MockInventoryView::new();
        view.expect_add_item()
            .with(eq(item.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        controller(repository, view).add(&item).unwrap();
    }

    #[test]
    fn add_duplicate_reports_existing_item() {
        let to_add = laptop();
        let existing = Item::new("1", "Laptop", 10, 999.99, "Gaming laptop");
        let stored = existing.clone();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let mut view = MockInventoryView::new();
        view.expect_show_error_message()
            .withf(move |message, item| {
                message == "Already existing item with id 1" && *item == existing
            })
            .times(1)
            .return_const(());

        controller(repository, view).add(&to_add).unwrap();
    }

    #[test]
    fn add_duplicate_references_existing_not_rejected() {
        // Laptop stored under "1"; a Mobile submitted under the same id.
        let stored = Item::new("1", "Laptop", 10, 999.9, "Simple Laptop");
        let rejected = Item::new("1", "Mobile", 5, 899.9, "Gaming Phone");
        let returned = stored.clone();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(returned.clone())));

        let mut view = MockInventoryView::new();
        view.expect_show_error_message()
            .withf(|_, item| item.name() == "Laptop" && item.description() == "Simple Laptop")
            .times(1)
            .return_const(());

        controller(repository, view).add(&rejected).unwrap();
    }

    #[test]
    fn add_propagates_save_failure_without_notifying() {
        let mut repository = MockItemRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository
            .expect_save()
            .returning(|_| Err(persistence_failure("save")));

        let view = MockInventoryView::new();

        let err = controller(repository, view).add(&laptop()).unwrap_err();
        assert_eq!(err, persistence_failure("save"));
    }

    // ── update ────────────────────────────────────────────────────────────

    #[test]
    fn update_existing_item_overwrites_then_notifies() {
        let item = Item::new("1", "Laptop", 10, 999.99, "Updated gaming laptop");
        let found = laptop();
        let mut seq = Sequence::new();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(found.clone())));
        repository
            .expect_update()
            .with(eq(item.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut view = MockInventoryView::new();
        view.expect_update_item()
            .with(eq(item.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        controller(repository, view).update(&item).unwrap();
    }

    #[test]
    fn update_missing_item_reports_input_item() {
        let item = Item::new("9", "Ghost", 1, 1.0, "Never stored");
        let expected = item.clone();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(ItemId::from("9")))
            .returning(|_| Ok(None));

        let mut view = MockInventoryView::new();
        view.expect_show_error_message()
            .withf(move |message, shown| {
                message == "No existing item with id 9"
                    && *shown == expected
                    && shown.id() == expected.id()
            })
            .times(1)
            .return_const(());

        controller(repository, view).update(&item).unwrap();
    }

    #[test]
    fn update_propagates_lookup_failure() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .returning(|_| Err(persistence_failure("find_by_id")));

        let view = MockInventoryView::new();

        assert!(controller(repository, view).update(&laptop()).is_err());
    }

    // ── delete ────────────────────────────────────────────────────────────

    #[test]
    fn delete_existing_item_removes_by_id_and_notifies_with_input() {
        let item = laptop();
        let refetched = Item::new("1", "Laptop (stored)", 3, 1.0, "stale copy");
        let mut seq = Sequence::new();

        let mut repository = MockItemRepository::new();
        repository
            .expect_find_by_id()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |_| Ok(Some(refetched.clone())));
        repository
            .expect_delete()
            .with(eq(ItemId::from("1")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let mut view = MockInventoryView::new();
        let expected = item.clone();
        view.expect_delete_item()
            .withf(move |shown| *shown == expected)
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        controller(repository, view).delete(&item).unwrap();
    }

    #[test]
    fn delete_missing_item_reports_input_item() {
        let item = laptop();
        let expected = item.clone();

        let mut repository = MockItemRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let mut view = MockInventoryView::new();
        view.expect_show_error_message()
            .withf(move |message, shown| message == "No existing item with id 1" && *shown == expected)
            .times(1)
            .return_const(());

        controller(repository, view).delete(&item).unwrap();
    }

    // ── concurrency ───────────────────────────────────────────────────────

    const WAIT: Duration = Duration::from_secs(5);
    const QUIET: Duration = Duration::from_millis(200);

    /// Store whose `save` parks until the test releases it. Every lookup is
    /// reported on `lookups` so the test sees which calls got past the guard.
    struct GatedRepository {
        items: Mutex<Vec<Item>>,
        lookups: Sender<ItemId>,
        parked: Sender<()>,
        release: Mutex<Receiver<()>>,
    }

    impl GatedRepository {
        fn items(&self) -> MutexGuard<'_, Vec<Item>> {
            self.items.lock().unwrap()
        }
    }

    impl ItemRepository for GatedRepository {
        fn find_all(&self) -> InventoryResult<Vec<Item>> {
            Ok(self.items().clone())
        }

        fn find_by_id(&self, id: &ItemId) -> InventoryResult<Option<Item>> {
            let _ = self.lookups.send(id.clone());
            let found = self.items().iter().find(|i| i.id() == id).cloned();
            Ok(found)
        }

        fn save(&self, item: &Item) -> InventoryResult<()> {
            let _ = self.parked.send(());
            // A dropped sender releases as well.
            let _ = self.release.lock().unwrap().recv();
            self.items().push(item.clone());
            Ok(())
        }

        fn update(&self, item: &Item) -> InventoryResult<()> {
            if let Some(slot) = self.items().iter_mut().find(|i| i.id() == item.id()) {
                *slot = item.clone();
            }
            Ok(())
        }

        fn delete(&self, id: &ItemId) -> InventoryResult<()> {
            self.items().retain(|i| i.id() != id);
            Ok(())
        }
    }

    /// Park an `add` inside `save`, then start `mutation` on another thread
    /// and check it stays out of the repository until the add is released,
    /// while a `list` issued meanwhile completes.
    fn assert_waits_for_pending_add(mutation: fn(&ItemController, &Item) -> InventoryResult<()>) {
        let (lookups_tx, lookups) = mpsc::channel();
        let (parked_tx, parked) = mpsc::channel();
        let (release, release_rx) = mpsc::channel();
        let repository = GatedRepository {
            items: Mutex::default(),
            lookups: lookups_tx,
            parked: parked_tx,
            release: Mutex::new(release_rx),
        };

        let mut view = MockInventoryView::new();
        view.expect_add_item().times(1).return_const(());
        view.expect_display_items()
            .with(eq(Vec::<Item>::new()))
            .times(1)
            .return_const(());
        view.expect_update_item().return_const(());
        view.expect_delete_item().return_const(());
        view.expect_show_error_message().return_const(());

        let controller = Arc::new(ItemController::new(Box::new(repository), Box::new(view)));

        let first = {
            let controller = Arc::clone(&controller);
            thread::spawn(move || controller.add(&laptop()))
        };
        assert_eq!(lookups.recv_timeout(WAIT).unwrap(), ItemId::from("1"));
        parked.recv_timeout(WAIT).unwrap();

        let second = {
            let controller = Arc::clone(&controller);
            thread::spawn(move || mutation(&controller, &laptop()))
        };
        assert!(
            lookups.recv_timeout(QUIET).is_err(),
            "second mutation reached the repository while the add was pending"
        );

        let (listed_tx, listed) = mpsc::channel();
        {
            let controller = Arc::clone(&controller);
            thread::spawn(move || listed_tx.send(controller.list()).unwrap());
        }
        listed.recv_timeout(WAIT).unwrap().unwrap();

        release.send(()).unwrap();
        first.join().unwrap().unwrap();
        assert_eq!(lookups.recv_timeout(WAIT).unwrap(), ItemId::from("1"));
        second.join().unwrap().unwrap();
    }

    #[test]
    fn add_waits_for_pending_add() {
        assert_waits_for_pending_add(ItemController::add);
    }

    #[test]
    fn update_waits_for_pending_add() {
        assert_waits_for_pending_add(ItemController::update);
    }

    #[test]
    fn delete_waits_for_pending_add() {
        assert_waits_for_pending_add(ItemController::delete);
    }
}
