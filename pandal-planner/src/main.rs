use pandal_planner::cache::{CacheConfig, CachedDirections};
use pandal_planner::directions::{DirectionsClient, DirectionsConfig};
use pandal_planner::domain::{GeoPoint, RoutePreferences, RouteRequest};
use pandal_planner::engine::{PlannerConfig, RoutePlanner};
use pandal_planner::store::sample_kolkata;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Get the provider credential from the environment. Without it every
    // directions call errors and the planner serves fallback routes, which
    // still demonstrates the full pipeline.
    let api_key = std::env::var("MAPS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: MAPS_API_KEY not set. Routes will use the local fallback.");
        String::new()
    });

    let client = DirectionsClient::new(DirectionsConfig::new(&api_key))
        .expect("Failed to create directions client");
    let cached = CachedDirections::new(client, &CacheConfig::default());

    // Seeded north/south Kolkata data.
    let store = sample_kolkata();

    let planner = RoutePlanner::new(cached, store, PlannerConfig::default());

    let request = RouteRequest {
        start_point: GeoPoint::new(22.5646, 88.3433), // Esplanade
        end_point: GeoPoint::new(22.6011, 88.3721),   // Shyambazar
        selected_pandal_ids: vec![
            "college-square".to_string(),
            "ahiritola".to_string(),
            "kumartuli".to_string(),
            "bagbazar".to_string(),
        ],
        transport_mode: "walking".to_string(),
        preferences: RoutePreferences {
            budget: "medium".to_string(),
            cuisine: vec!["bengali".to_string()],
        },
        include_food_stops: true,
    };

    match planner.plan_route(&request).await {
        Ok(route) => {
            let json = serde_json::to_string_pretty(&route).expect("route serializes");
            println!("{json}");
        }
        Err(e) => {
            eprintln!("Planning failed: {e}");
            std::process::exit(1);
        }
    }
}
