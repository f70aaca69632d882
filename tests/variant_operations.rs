// Integration tests for the variant-specific operations

use motorstock::constants::MAX_SIZE;
use motorstock::inventory::{
    ArrayInventory, DynamicArrayInventory, Inventory, LinkedListInventory, QueueInventory,
    StackInventory,
};
use motorstock::record::cmp_ignore_case;
use motorstock::InventoryItem;
use std::cmp::Ordering;

fn item(date: &str, label: &str, brand: &str, engine: &str, status: &str) -> InventoryItem {
    InventoryItem::new(date, label, brand, engine, status)
}

#[test]
fn test_bounded_array_capacity() {
    let mut array = ArrayInventory::new();
    let records: Vec<InventoryItem> = (0..MAX_SIZE + 20)
        .map(|n| item("1/1/2023", "Old", "Kymco", &format!("K{}", n), "On-hand"))
        .collect();

    assert_eq!(array.extend_records(records), MAX_SIZE);
    assert_eq!(array.len(), MAX_SIZE);
    assert!(!array.insert(item("1/1/2023", "Old", "Kymco", "extra", "On-hand")));
    assert_eq!(array.len(), MAX_SIZE);
    assert_eq!(array.summary().brand_distribution, vec![("Kymco", MAX_SIZE)]);
}

#[test]
fn test_linked_list_delete_and_position() {
    let mut list = LinkedListInventory::new();
    for engine in ["A", "B", "C", "D"] {
        list.add_to_end(item("1/1/2023", "Old", "Honda", engine, "On-hand"));
    }

    assert!(list.delete_by_engine_number("d").is_some());
    assert!(list.delete_by_engine_number("A").is_some());
    assert!(list.delete_by_engine_number("A").is_none());

    assert_eq!(list.len(), 2);
    assert_eq!(list.get_at_position(1).map(|i| i.engine_number()), Some("B"));
    assert_eq!(list.get_at_position(2).map(|i| i.engine_number()), Some("C"));
    assert!(list.get_at_position(3).is_none());
    assert_eq!(list.last().map(|i| i.engine_number()), Some("C"));
}

#[test]
fn test_stack_process_sold_items() {
    let mut stack = StackInventory::new();
    stack.push(item("1/1/2023", "Old", "Honda", "A", "On-hand"));
    stack.push(item("1/1/2023", "Old", "Honda", "B", "Sold"));
    stack.push(item("1/1/2023", "Old", "Honda", "C", "On-hand"));

    let sold = stack.process_sold_items();
    assert_eq!(sold.len(), 1);
    assert_eq!(sold[0].engine_number(), "B");
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop().map(|i| i.engine_number().to_string()), Some("C".into()));
    assert_eq!(stack.pop().map(|i| i.engine_number().to_string()), Some("A".into()));
    assert!(stack.pop().is_none());
}

#[test]
fn test_queue_process_one_order() {
    let mut queue = QueueInventory::new();
    queue.enqueue(item("1/1/2023", "Old", "Honda", "A", "On-hand"));
    queue.enqueue(item("1/1/2023", "Old", "Honda", "B", "On-hand"));

    let batch = queue.process_orders(1);
    assert_eq!(batch.processed(), 1);
    assert_eq!(queue.processed_total(), 1);
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.count_by_status("Sold"), 1);
    assert_eq!(queue.peek_front().map(|i| i.status()), Some("Sold"));
}

#[test]
fn test_dynamic_array_remove_out_of_range() {
    let mut array = DynamicArrayInventory::new();
    array.add_item(item("1/1/2023", "Old", "Honda", "A", "On-hand"));
    array.add_item(item("1/1/2023", "Old", "Honda", "B", "On-hand"));
    let size = array.len() as isize;

    assert!(array.remove_item(-1).is_none());
    assert!(array.remove_item(size).is_none());
    assert_eq!(array.len(), 2);
}

#[test]
fn test_dynamic_array_sort_by_brand_idempotent() {
    let mut array = DynamicArrayInventory::new();
    for (brand, engine) in [
        ("Yamaha", "1"),
        ("kawasaki", "2"),
        ("Honda", "3"),
        ("Kymco", "4"),
        ("honda", "5"),
        ("Suzuki", "6"),
    ] {
        array.add_item(item("1/1/2023", "New", brand, engine, "On-hand"));
    }

    array.sort_by_brand();
    let once = array.as_slice().to_vec();
    assert!(once
        .windows(2)
        .all(|pair| cmp_ignore_case(pair[0].brand(), pair[1].brand()) != Ordering::Greater));

    array.sort_by_brand();
    assert_eq!(array.as_slice(), once.as_slice());

    let engines: Vec<&str> = array.iter().map(|i| i.engine_number()).collect();
    assert_eq!(engines, vec!["3", "5", "2", "4", "6", "1"]);
}

#[test]
fn test_dynamic_array_statistics() {
    let mut array = DynamicArrayInventory::new();
    array.add_item(item("1/1/2023", "Old", "Honda", "A", "On-hand"));
    array.add_item(item("1/1/2023", "New", "Yamaha", "B", "Sold"));
    array.add_item(item("1/1/2023", "New", "Honda", "C", "Sold"));
    array.add_item(item("1/1/2023", "Old", "Suzuki", "D", "On-hand"));

    let stats = array.statistics();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.on_hand, 2);
    assert_eq!(stats.sold, 2);
    assert_eq!(stats.old_stock, 2);
    assert_eq!(stats.new_stock, 2);
    assert_eq!(stats.on_hand_percentage(), 50.0);

    let brands: Vec<(&str, usize)> = stats
        .brands
        .iter()
        .map(|b| (b.brand.as_str(), b.count))
        .collect();
    assert_eq!(brands, vec![("Honda", 2), ("Yamaha", 1), ("Suzuki", 1)]);

    let text = stats.to_string();
    assert!(text.contains("  Honda: 2 (50.0%)"));
    assert!(text.contains("  Yamaha: 1 (25.0%)"));
}
