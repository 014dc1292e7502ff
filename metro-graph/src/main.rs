use std::time::Instant;

use rand::Rng;
use tracing_subscriber::EnvFilter;

use metro_graph::network::{Network, NetworkStats};
use metro_graph::{render, sample};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let json = std::env::args().any(|arg| arg == "--json");
    let bench = std::env::args().any(|arg| arg == "--bench");

    let network = sample::ankara_metro();
    println!("{}", render::network_structure(&network));

    let stats = network.get_network_statistics();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).expect("statistics serialize to JSON")
        );
    } else {
        print_stats(&stats);
    }

    // A route that needs a branch, the loop shortcut and nothing else.
    let route = network.find_optimal_route(&"Bilkent".to_string(), &"Törekent".to_string());
    let names: Vec<&str> = route
        .iter()
        .filter_map(|id| network.station(id.as_str()))
        .map(|station| station.payload().as_str())
        .collect();
    println!();
    println!("Route Bilkent -> Törekent: {}", names.join(" -> "));

    if bench {
        println!();
        run_benchmark();
    }
}

fn print_stats(stats: &NetworkStats) {
    println!("Network statistics:");
    println!("  total stations:   {}", stats.total_stations);
    println!("  total tracks:     {}", stats.total_tracks);
    println!("  total data items: {}", stats.total_data_items);
    println!("  junctions:        {}", stats.junction_count);
    println!("  express stations: {}", stats.express_stations);
    println!("  transfer hubs:    {}", stats.transfer_hubs);
    println!("  terminal points:  {}", stats.terminal_points);
    let distribution: Vec<String> = stats
        .track_distribution
        .iter()
        .map(|(kind, count)| format!("{kind}: {count}"))
        .collect();
    println!("  tracks by kind:   {}", distribution.join(", "));
    println!("  avg connectivity: {:.2}", stats.avg_connectivity);
}

/// Builds a 1000-item network and times route queries against membership
/// scans over a flat `Vec` holding the same items.
fn run_benchmark() {
    println!("=== NETWORK VS FLAT LIST ===");
    let items: Vec<String> = (0..1000).map(|i| format!("data_item_{i}")).collect();

    let started = Instant::now();
    let mut network = Network::new();
    network.create_main_line("main_0", items[..100].to_vec(), "blue");
    for (i, item) in items.iter().enumerate().skip(100) {
        if i % 100 == 0 {
            // Hang a 50-item branch off the least-branched station.
            let junction = network
                .stations()
                .min_by_key(|station| station.branches().len())
                .map(|station| station.id().clone());
            if let Some(junction) = junction {
                let chunk = items[i..(i + 50).min(items.len())].to_vec();
                let index = i / 100;
                if network
                    .create_branch_line(
                        &format!("branch_{index}"),
                        junction.as_str(),
                        chunk,
                        &format!("color_{index}"),
                    )
                    .is_err()
                {
                    network.insert_data_optimally(item.clone(), None);
                }
            }
        } else {
            network.insert_data_optimally(item.clone(), None);
        }
    }
    let network_build = started.elapsed();

    let started = Instant::now();
    let flat: Vec<String> = items.clone();
    let flat_build = started.elapsed();

    let mut rng = rand::thread_rng();
    let half = items.len() / 2;

    let started = Instant::now();
    let mut routes_found = 0;
    for _ in 0..100 {
        let from = &items[rng.gen_range(0..half)];
        let to = &items[rng.gen_range(half..items.len())];
        if !network.find_optimal_route(from, to).is_empty() {
            routes_found += 1;
        }
    }
    let network_queries = started.elapsed();

    let started = Instant::now();
    let mut hits = 0;
    for _ in 0..100 {
        let from = &items[rng.gen_range(0..half)];
        let to = &items[rng.gen_range(half..items.len())];
        if flat.contains(from) && flat.contains(to) {
            hits += 1;
        }
    }
    let flat_queries = started.elapsed();

    println!("build   network: {network_build:?}  list: {flat_build:?}");
    println!("queries network: {network_queries:?}  list: {flat_queries:?}");
    println!("routes found: {routes_found}/100, list hits: {hits}/100");
    println!();
    print_stats(&network.get_network_statistics());
}
