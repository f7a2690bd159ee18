//! End-to-end tests driving the tracker the way the presentation layer does:
//! fetch the list from a store, render rows, create a transaction, render
//! again.

use time::macros::datetime;

use dtmoney_core::{
    Locale, Transaction, TransactionKind,
    stores::{MemoryTransactionStore, TransactionStore},
    summarize, table_rows,
};

fn store_with_sample_transactions() -> MemoryTransactionStore {
    let mut store = MemoryTransactionStore::new();

    store
        .create(
            Transaction::build("Freelance de website", 6000.0, TransactionKind::Deposit)
                .category("Dev")
                .created_at(datetime!(2021-02-12 09:00 UTC)),
        )
        .unwrap();
    store
        .create(
            Transaction::build("Aluguel", 1100.0, TransactionKind::Withdraw)
                .category("Casa")
                .created_at(datetime!(2021-02-14 11:00 UTC)),
        )
        .unwrap();

    store
}

#[test]
fn lists_transactions_with_formatted_data() {
    let store = store_with_sample_transactions();

    let transactions = store.fetch_all().unwrap();
    let rows = table_rows(&transactions, &Locale::pt_br());

    // Newest first: the rent was created after the freelance payment.
    assert_eq!(rows[0].title, "Aluguel");
    assert_eq!(rows[0].formatted_amount, "R$ 1.100,00");
    assert_eq!(rows[0].formatted_date, "14/02/2021");

    assert_eq!(rows[1].title, "Freelance de website");
    assert_eq!(rows[1].formatted_amount, "R$ 6.000,00");
    assert_eq!(rows[1].formatted_date, "12/02/2021");
}

#[test]
fn creates_a_new_transaction_against_an_empty_store() {
    let mut store = MemoryTransactionStore::new();

    let created = store
        .create(
            Transaction::build("Transação de teste", 200.0, TransactionKind::Deposit)
                .category("Categoria ABC"),
        )
        .unwrap();
    assert_eq!(created.id(), 1);

    let transactions = store.fetch_all().unwrap();
    let rows = table_rows(&transactions, &Locale::pt_br());

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Transação de teste");
    assert_eq!(rows[0].formatted_amount, "R$ 200,00");
    assert_eq!(rows[0].category, "Categoria ABC");
}

#[test]
fn calculates_incoming_outgoing_and_total() {
    let mut store = MemoryTransactionStore::new();

    for (amount, kind) in [
        (500.0, TransactionKind::Deposit),
        (750.0, TransactionKind::Deposit),
        (125.0, TransactionKind::Withdraw),
        (50.0, TransactionKind::Withdraw),
    ] {
        store
            .create(Transaction::build("Transaction", amount, kind).category("Dev"))
            .unwrap();
    }

    let transactions = store.fetch_all().unwrap();
    let summary = summarize(&transactions).display(&Locale::pt_br());

    assert_eq!(summary.income, "R$ 1.250,00");
    assert_eq!(summary.outcome, "- R$ 175,00");
    assert_eq!(summary.total, "R$ 1.075,00");
}

#[test]
fn creating_a_transaction_puts_it_above_existing_ones() {
    let mut store = store_with_sample_transactions();

    store
        .create(
            Transaction::build("Mercado", 320.0, TransactionKind::Withdraw).category("Alimentação"),
        )
        .unwrap();

    let transactions = store.fetch_all().unwrap();

    assert_eq!(transactions[0].title(), "Mercado");
    assert_eq!(transactions.len(), 3);
}
