//! Demo walking through the core operations of a small network.
//!
//! Run with `RUST_LOG=debug` to see the engine's tracing output.

use social_graph_lib_rs::network::SocialNetwork;
use social_graph_lib_rs::util::ManualClock;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let clock = ManualClock::starting_at("2025-05-01T12:00:00+00:00")?;
    let mut network = SocialNetwork::with_clock(clock);

    println!("=== Registering users ===");
    for (name, bio) in [
        ("alice", "graph enthusiast"),
        ("bob", "posts a lot"),
        ("carol", "bob's colleague"),
        ("dave", "keeps to himself"),
    ] {
        network.register_user(name, bio)?;
        println!("{name} has been added to the network.");
    }

    if let Err(e) = network.register_user("alice", "again") {
        println!("Rejected: {e}");
    }

    println!("\n=== Friendships ===");
    network.add_friend("alice", "bob")?;
    network.add_friend("bob", "carol")?;
    println!("alice <-> bob, bob <-> carol");

    println!("\n=== Posts ===");
    let index = network.create_post("bob", "hi")?;
    network.create_post("carol", "hello from carol")?;
    network.like_post("bob", index)?;
    network.comment_on_post("bob", index, "hey bob!")?;
    if let Err(e) = network.like_post("bob", 7) {
        println!("Rejected: {e}");
    }

    println!("\n=== alice's feed ===");
    print!("{}", network.build_feed("alice")?);

    println!("\n=== Suggestions for alice ===");
    for suggestion in network.suggest_friends("alice")? {
        println!(
            "{} (Mutual friends: {})",
            suggestion.username, suggestion.mutual_friends
        );
    }

    println!("\n=== Shortest paths ===");
    let path = network.shortest_path("alice", "carol")?;
    println!(
        "alice -> carol in {} steps: {}",
        path.hops,
        path.usernames.join(" -> ")
    );
    match network.shortest_path("alice", "dave") {
        Ok(path) => println!("alice -> dave in {} steps", path.hops),
        Err(e) => println!("{e}"),
    }

    println!("\n=== Profiles ===");
    for name in network.usernames() {
        if let Some(user) = network.user(name) {
            println!("{user}\n");
        }
    }

    Ok(())
}
