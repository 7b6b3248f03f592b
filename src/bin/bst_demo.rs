//! Builds a tree from the integer keys given on the command line (or a small default set), then
//! logs its traversals and shape before and after deleting the root key.
//!
//! ```text
//! RUST_LOG=debug bst_demo 10 5 15 8 3 7 20 17 9 14
//! ```

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use plain_bst::{Order, Tree};

const DEFAULT_KEYS: [i64; 10] = [10, 5, 15, 8, 3, 7, 20, 17, 9, 14];

const ORDERS: [Order; 4] = [
    Order::InOrder,
    Order::PreOrder,
    Order::PostOrder,
    Order::LevelOrder,
];

fn parse_keys<I>(args: I) -> Result<Vec<i64>>
where
    I: IntoIterator<Item = String>,
{
    let keys = args
        .into_iter()
        .map(|arg| {
            arg.parse::<i64>()
                .with_context(|| format!("key {:?} is not an integer", arg))
        })
        .collect::<Result<Vec<_>>>()?;

    if keys.is_empty() {
        debug!("no keys given, using the defaults");
        return Ok(DEFAULT_KEYS.to_vec());
    }
    Ok(keys)
}

fn report(tree: &Tree<i64>) -> Result<()> {
    info!(
        "{} keys, height {}, min {}, max {}",
        tree.len(),
        tree.height()?,
        tree.min()?,
        tree.max()?
    );
    for order in ORDERS.iter().copied() {
        info!("{:?}: {:?}", order, tree.keys(order));
    }
    debug!(
        "full: {}, balanced: {}, valid: {}",
        tree.is_full(),
        tree.is_balanced(),
        tree.is_valid()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let keys = parse_keys(std::env::args().skip(1))?;
    let mut tree: Tree<i64> = keys.iter().copied().collect();
    report(&tree)?;

    let root = match tree.keys(Order::PreOrder).first() {
        Some(root) => **root,
        None => bail!("no keys to build a tree from"),
    };
    if !tree.delete(&root) {
        bail!("root key {} could not be deleted", root);
    }
    info!("deleted root key {}", root);

    if tree.is_empty() {
        warn!("tree is now empty");
        return Ok(());
    }
    report(&tree)
}
