#![cfg(test)]
use mochila_common::error::InventoryError;
use mochila_common::item::Item;
use mochila_core::{CAPACITY, Inventory};
use pretty_assertions::assert_eq;

use super::util::{add, run, run_with};

fn line(idx: usize, name: &str, category: &str, quantity: u32) -> String {
    format!("{idx}) Name: {name} | Category: {category} | Quantity: {quantity}")
}

/// Rifle and bandage walkthrough: add two, list, remove one, search the other.
#[test]
fn rifle_and_bandage_walkthrough() {
    let script: Vec<&str> = [
        add("Rifle", "arma", "2").as_slice(),
        add("Bandagem", "cura", "5").as_slice(),
        &["3", "2", "Rifle", "4", "Bandagem", "0"],
    ]
    .concat();

    let transcript = run(&script);
    let listings = transcript.listings();

    assert_eq!(listings.len(), 5);
    assert_eq!(listings[0], [line(1, "Rifle", "arma", 2)]);
    assert_eq!(
        listings[2],
        [line(1, "Rifle", "arma", 2), line(2, "Bandagem", "cura", 5)]
    );
    assert_eq!(listings[3], [line(1, "Bandagem", "cura", 5)]);

    assert!(transcript.text.contains("[+] Item removed."));
    assert!(transcript.text.contains("Item found:\nName: Bandagem\nCategory: cura\nQuantity: 5\n"));
    assert_eq!(
        transcript.inventory.list(),
        [Item::new("Bandagem", "cura", 5).unwrap()]
    );
}

#[test]
fn eleventh_item_does_not_fit() {
    let names: Vec<String> = (1..=CAPACITY).map(|i| format!("item{i}")).collect();
    let mut script: Vec<&str> = Vec::new();
    for name in &names {
        script.extend(add(name, "tool", "1"));
    }
    script.extend(["1", "0"]);

    let transcript = run(&script);
    assert_eq!(transcript.inventory.len(), CAPACITY);

    let expected = InventoryError::CapacityExceeded { capacity: CAPACITY }.to_string();
    assert_eq!(transcript.text.matches(&expected).count(), 1);
    assert_eq!(transcript.text.matches("Item name: ").count(), CAPACITY);
    assert!(transcript.text.contains("⟦ BACKPACK 10/10 ⟧"));
}

#[test]
fn invalid_menu_input_reprompts_without_side_effects() {
    let mut script: Vec<&str> = vec!["banana", "9", ""];
    script.extend(add("Rope", "tool", "1"));
    script.push("0");

    let transcript = run(&script);
    assert!(transcript.text.contains("[-] invalid input 'banana', type the number of an option"));
    assert!(transcript.text.contains("[-] unknown option 9"));
    assert!(transcript.text.contains("[-] invalid input '', type the number of an option"));
    assert_eq!(transcript.last_listing(), [line(1, "Rope", "tool", 1)]);
    assert_eq!(transcript.text.matches("Choose an option: ").count(), 5);
}

#[test]
fn rejected_fields_never_store_a_partial_item() {
    let script = [
        "1", "Rope", "",
        "1", "Rope", "tool", "-3",
        "1", "Rope", "tool", "lots",
        "0",
    ];

    let transcript = run(&script);
    assert!(transcript.inventory.is_empty());
    assert!(transcript.text.contains("category cannot be empty"));
    assert!(transcript.text.contains("quantity cannot be negative (got -3)"));
    assert!(transcript.text.contains("'lots' is not a whole number"));
    assert!(!transcript.text.contains("unknown option"));
    assert_eq!(transcript.listings().len(), 3);
}

#[test]
fn remove_missing_name_leaves_backpack_alone() {
    let mut inventory = Inventory::new();
    inventory.insert("Knife", "arma", 1).unwrap();

    let transcript = run_with(inventory.clone(), &["2", "knife", "4", "Flare", "0"]);
    assert_eq!(transcript.inventory, inventory);
    assert!(transcript.text.contains("[-] item 'knife' not found"));
    assert!(transcript.text.contains("[-] item 'Flare' not found"));
}

#[test]
fn duplicate_names_remove_first_match() {
    let script: Vec<&str> = [
        add("Ammo", "municao", "30").as_slice(),
        add("Ammo", "municao", "12").as_slice(),
        &["2", "Ammo", "0"],
    ]
    .concat();

    let transcript = run(&script);
    assert_eq!(transcript.last_listing(), [line(1, "Ammo", "municao", 12)]);
}

#[test]
fn listing_twice_is_identical() {
    let mut inventory = Inventory::new();
    inventory.insert("Rifle", "arma", 2).unwrap();
    inventory.insert("Flare", "tool", 3).unwrap();

    let transcript = run_with(inventory, &["3", "3", "0"]);
    let listings = transcript.listings();
    assert_eq!(listings.len(), 2);
    assert_eq!(listings[0], listings[1]);
}

#[test]
fn names_keep_inner_and_leading_spaces() {
    let transcript = run(&[add(" Big Knife", "arma", "1").as_slice(), &["0"]].concat());
    assert_eq!(transcript.inventory.list()[0].name(), " Big Knife");
}
