//! Interface tests for the list contract using Cucumber.
//!
//! ```bash
//! cargo test --test interfaces
//! ```

mod steps;

use cucumber::World;
use steps::linked_list::LinkedListWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running LinkedList Interface Tests ===\n");
    LinkedListWorld::cucumber()
        .fail_on_skipped()
        .run_and_exit("tests/interfaces/features/linked_list.feature")
        .await;
}
