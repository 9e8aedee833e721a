/// `QueryMap` usage example
use url_parts::QueryMap;

fn main() {
    // Parse a query string
    let mut query = QueryMap::parse("name=John&age=30&tag=a&tag=b&debug");

    // Get values
    println!("name: {:?}", query.single("name")); // Some(Some("John"))
    println!("tag: {:?}", query.get("tag")); // Some([Some("a"), Some("b")])
    println!("debug: {:?}", query.single("debug")); // Some(None)
    println!("missing: {:?}", query.get("missing")); // None
    println!();

    // Add appends, set replaces
    query.add("tag", ["c"]).set("age", ["31"]);
    println!("After add/set: {query}"); // name=John&age=31&tag=a&tag=b&tag=c&debug
    println!();

    // Drop a key
    query.drop("debug");
    println!("After drop: {query}"); // name=John&age=31&tag=a&tag=b&tag=c
    println!();

    // Merge another query string, replacing existing keys
    query.merge("age=32&city=Tokyo", true);
    println!("After merge: {query}"); // name=John&age=32&tag=a&tag=b&tag=c&city=Tokyo
    println!();

    // Iterate over all pairs
    println!("All pairs:");
    for (key, value) in query.pairs() {
        println!("  {key} = {value:?}");
    }
}
