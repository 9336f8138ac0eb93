mod alternates;
mod route;
mod shortest_path;

pub use alternates::{
    Alternate, AlternatesConfig, EnumerationConfig, all_routes, ranked_alternates, ranked_routes,
};
pub use route::Route;
pub use shortest_path::{plan_route, shortest_path};
