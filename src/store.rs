//! Defines the transaction store trait the engine consumes, and an
//! in-memory implementation.
//!
//! The engine never fetches data itself; it is handed a materialized
//! snapshot by whatever implements [TransactionStore]. Store failures are
//! surfaced to the caller as [Error] values, not handled inside the engine.

use crate::{Error, Transaction, TransactionBuilder, TransactionId};

/// Handles the creation and retrieval of transactions.
pub trait TransactionStore {
    /// Retrieve every transaction in the store, in insertion order.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Create a new transaction in the store.
    ///
    /// The store assigns the ID; any ID on the builder's output is ignored.
    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error>;

    /// Retrieve a transaction from the store by its ID.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Replace the transaction with `id` with the builder's output.
    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error>;

    /// Remove the transaction with `id` from the store.
    fn delete(&mut self, id: TransactionId) -> Result<(), Error>;
}

/// A [TransactionStore] backed by a plain vector.
///
/// Used as the reference collaborator in tests and demos. Insertion order is
/// preserved, which downstream grouping relies on for stable bucket
/// contents.
#[derive(Debug)]
pub struct MemoryTransactionStore {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
}

impl MemoryTransactionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            next_id: 1,
        }
    }
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        Ok(self.transactions.clone())
    }

    fn create(&mut self, builder: TransactionBuilder) -> Result<Transaction, Error> {
        let transaction = builder.finalise(Some(self.next_id))?;
        self.next_id += 1;
        self.transactions.push(transaction.clone());

        Ok(transaction)
    }

    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        self.transactions
            .iter()
            .find(|transaction| transaction.id() == Some(id))
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn update(
        &mut self,
        id: TransactionId,
        builder: TransactionBuilder,
    ) -> Result<Transaction, Error> {
        let updated = builder.finalise(Some(id))?;

        let slot = self
            .transactions
            .iter_mut()
            .find(|transaction| transaction.id() == Some(id))
            .ok_or(Error::UpdateMissingTransaction)?;
        *slot = updated.clone();

        Ok(updated)
    }

    fn delete(&mut self, id: TransactionId) -> Result<(), Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id() == Some(id))
            .ok_or(Error::DeleteMissingTransaction)?;
        self.transactions.remove(index);

        Ok(())
    }
}

#[cfg(test)]
mod memory_store_tests {
    use time::macros::date;

    use super::{MemoryTransactionStore, TransactionStore};
    use crate::{Error, Transaction, TransactionKind};

    fn store_with_two_transactions() -> MemoryTransactionStore {
        let mut store = MemoryTransactionStore::new();
        store
            .create(
                Transaction::build(100.0, date!(2024 - 01 - 05), TransactionKind::Income)
                    .description("Pay"),
            )
            .unwrap();
        store
            .create(
                Transaction::build(40.0, date!(2024 - 01 - 06), TransactionKind::Expense)
                    .category("Food"),
            )
            .unwrap();

        store
    }

    #[test]
    fn create_assigns_sequential_ids() {
        let store = store_with_two_transactions();

        let transactions = store.list().unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id(), Some(1));
        assert_eq!(transactions[1].id(), Some(2));
    }

    #[test]
    fn create_rejects_invalid_amount() {
        let mut store = MemoryTransactionStore::new();

        let result = store.create(Transaction::build(
            -1.0,
            date!(2024 - 01 - 01),
            TransactionKind::Expense,
        ));

        assert_eq!(result, Err(Error::InvalidAmount(-1.0)));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = store_with_two_transactions();

        let transactions = store.list().unwrap();

        assert_eq!(transactions[0].description(), "Pay");
        assert_eq!(transactions[1].category(), "Food");
    }

    #[test]
    fn get_returns_matching_transaction() {
        let store = store_with_two_transactions();

        let transaction = store.get(2).unwrap();

        assert_eq!(transaction.category(), "Food");
    }

    #[test]
    fn get_fails_on_unknown_id() {
        let store = store_with_two_transactions();

        assert_eq!(store.get(99), Err(Error::NotFound));
    }

    #[test]
    fn update_replaces_transaction_in_place() {
        let mut store = store_with_two_transactions();

        let updated = store
            .update(
                2,
                Transaction::build(55.0, date!(2024 - 01 - 06), TransactionKind::Expense)
                    .category("Dining"),
            )
            .unwrap();

        assert_eq!(updated.id(), Some(2));
        assert_eq!(store.get(2).unwrap().category(), "Dining");
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn update_fails_on_unknown_id() {
        let mut store = store_with_two_transactions();

        let result = store.update(
            99,
            Transaction::build(1.0, date!(2024 - 01 - 01), TransactionKind::Income),
        );

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn delete_removes_transaction() {
        let mut store = store_with_two_transactions();

        store.delete(1).unwrap();

        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(store.get(1), Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_on_unknown_id() {
        let mut store = store_with_two_transactions();

        assert_eq!(store.delete(99), Err(Error::DeleteMissingTransaction));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = store_with_two_transactions();
        store.delete(2).unwrap();

        let transaction = store
            .create(Transaction::build(
                10.0,
                date!(2024 - 02 - 01),
                TransactionKind::Expense,
            ))
            .unwrap();

        assert_eq!(transaction.id(), Some(3));
    }
}
