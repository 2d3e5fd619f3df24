//! Orchestration behind the `valuekit` subcommands.
//!
//! Each function builds model values from configuration, exercises one
//! primitive, and returns a serializable report. Printing and exit codes are
//! left to `main`.

use std::cell::Cell;
use std::rc::Rc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::io::config::KitConfig;
use crate::model::customer::Customer;
use crate::model::product::{OrderItem, Product};
use crate::model::task::Task;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordReport {
    pub product: Product,
    pub discounted: Product,
    pub item: OrderItem,
    pub item_copy: OrderItem,
    /// `item == item_copy`.
    pub copies_equal: bool,
    /// Hash of `item` equals hash of `item_copy`.
    pub hashes_equal: bool,
    /// The copy refers to the same product entity as the original.
    pub product_shared: bool,
}

/// Build a product, a repriced copy, an order line, and a shallow copy of it.
pub fn record_report(
    name: &str,
    price: f64,
    discounted_price: f64,
    quantity: i64,
) -> Result<RecordReport> {
    let product = Product::new(name, price).context("build product")?;
    let discounted = product
        .with_price(discounted_price)
        .context("copy product with new price")?;
    let item = OrderItem::new(product.clone(), quantity).context("build order item")?;
    let item_copy = item.copy();

    let report = RecordReport {
        copies_equal: item == item_copy,
        hashes_equal: item.record().hash_value() == item_copy.record().hash_value(),
        product_shared: item.shares_product_with(&item_copy),
        product,
        discounted,
        item,
        item_copy,
    };
    debug!(
        copies_equal = report.copies_equal,
        product_shared = report.product_shared,
        "record report built"
    );
    Ok(report)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriorityWrite {
    pub requested: i64,
    pub stored: i64,
}

impl PriorityWrite {
    pub fn clamped(&self) -> bool {
        self.requested != self.stored
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityReport {
    pub task: Task,
    pub writes: Vec<PriorityWrite>,
}

impl PriorityReport {
    pub fn any_clamped(&self) -> bool {
        self.writes.iter().any(PriorityWrite::clamped)
    }
}

/// Apply each requested priority to a task using the configured range.
pub fn priority_report(
    cfg: &KitConfig,
    task_name: &str,
    values: &[i64],
) -> Result<PriorityReport> {
    let mut task = Task::with_bounds(
        task_name,
        cfg.priority.min,
        cfg.priority.max,
        cfg.priority.default,
    )
    .context("build task")?;

    let writes = values
        .iter()
        .map(|&requested| PriorityWrite {
            requested,
            stored: task.set_priority(requested),
        })
        .collect::<Vec<_>>();

    let clamped = writes.iter().filter(|w| w.clamped()).count();
    info!(writes = writes.len(), clamped, "priority writes applied");
    Ok(PriorityReport { task, writes })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessagesReport {
    pub customer: String,
    pub reads: u32,
    pub message_count: usize,
    pub loader_invocations: u32,
    pub messages: Vec<String>,
}

/// Read the configured customer's messages `reads` times.
pub fn messages_report(cfg: &KitConfig, reads: u32) -> Result<MessagesReport> {
    let invocations = Rc::new(Cell::new(0u32));
    let counter = Rc::clone(&invocations);
    let history = cfg.customer.messages.clone();
    let customer = Customer::with_loader(&cfg.customer.name, move || {
        counter.set(counter.get() + 1);
        Ok(history.clone())
    });

    let mut messages: &[String] = &[];
    for _ in 0..reads {
        messages = customer.messages().context("load customer messages")?;
    }

    Ok(MessagesReport {
        customer: customer.name().to_string(),
        reads,
        message_count: messages.len(),
        loader_invocations: invocations.get(),
        messages: messages.to_vec(),
    })
}
