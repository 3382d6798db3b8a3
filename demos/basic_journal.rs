//! Basic journal usage example

use ledger_core::utils::memory::MemoryStore;
use ledger_core::{
    AccountType, CreateJournalEntryLineRequest, CreateJournalEntryRequest, Ledger,
};
use chrono::NaiveDate;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ledger_core=debug")),
        )
        .init();

    println!("🧾 Ledger Core - Basic Journal Example\n");

    // Create a ledger with in-memory storage
    let storage = MemoryStore::new();
    let mut ledger = Ledger::new(storage);

    // 1. Register a tenant
    println!("🏢 Registering Tenant...");
    let tenant = ledger.create_tenant("Acme Corp", "ACME", 12, "USD").await?;
    println!(
        "  ✓ Created tenant: {} ({}), fiscal year ends month {}\n",
        tenant.name(),
        tenant.code(),
        tenant.fiscal_year_end_month()
    );

    // 2. Set up a small chart of accounts
    println!("📊 Setting up Chart of Accounts...");
    let mut assets = ledger
        .create_account(tenant.id(), "1000", "Current Assets", AccountType::Asset, None)
        .await?;
    let cash = ledger
        .create_account(
            tenant.id(),
            "1010",
            "Cash",
            AccountType::Asset,
            Some(assets.id()),
        )
        .await?;
    let revenue = ledger
        .create_account(tenant.id(), "4010", "Sales Revenue", AccountType::Revenue, None)
        .await?;

    for account in [&assets, &cash, &revenue] {
        println!(
            "  ✓ Created account: {} - {} ({})",
            account.code(),
            account.name(),
            account.account_type()
        );
    }

    let linked = ledger.load_children(&mut assets).await?;
    println!("  ✓ Linked {} child account(s) under {}\n", linked, assets.name());

    // 3. A cost center for the revenue side
    let operations = ledger
        .create_cost_center(tenant.id(), "CC-100", "Operations")
        .await?;
    println!(
        "🏷️  Created cost center: {} - {}\n",
        operations.code(),
        operations.name()
    );

    // 4. Record a balanced journal entry
    println!("💰 Creating Journal Entry...");
    let entry_id = ledger
        .create_journal_entry(CreateJournalEntryRequest {
            tenant_id: tenant.id().to_string(),
            posting_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            lines: vec![
                CreateJournalEntryLineRequest {
                    account_id: cash.id().to_string(),
                    amount: "1250.00".to_string(),
                    direction: "Debit".to_string(),
                    description: "Cash received".to_string(),
                    cost_center_id: None,
                },
                CreateJournalEntryLineRequest {
                    account_id: revenue.id().to_string(),
                    amount: "1250.00".to_string(),
                    direction: "Credit".to_string(),
                    description: "January sales".to_string(),
                    cost_center_id: Some(operations.id().to_string()),
                },
            ],
        })
        .await?;
    println!("  ✓ Created draft entry {}\n", entry_id);

    // 5. Post it
    println!("📌 Posting Journal Entry...");
    ledger.post_journal_entry(&entry_id.to_string()).await?;
    println!("  ✓ Entry posted\n");

    // 6. Read the projection back
    println!("🔍 Reading Entry Projection...");
    let view = ledger
        .get_journal_entry(&entry_id.to_string())
        .await?
        .expect("entry was just created");

    println!("  Entry {} [{}] on {}", view.id, view.status, view.posting_date);
    println!(
        "  Debits {} / Credits {}",
        view.total_debits, view.total_credits
    );
    for line in &view.lines {
        println!(
            "    {} {} -> account {} ({})",
            line.direction, line.amount, line.account_id, line.description
        );
    }

    println!("\n✅ Done.");
    Ok(())
}
