/*
 * Particle Plexus
 *
 * An interactive particle constellation: point agents drift across a
 * toroidal plane, swirl around the pointer, and link into a proximity mesh
 * of connection lines. The simulation core lives in the library crate; this
 * binary wires it to a nannou window.
 */

use tracing_subscriber::EnvFilter;

use plexus::app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "plexus=info".into()))
        .init();

    nannou::app(app::model).update(app::update).run();
}
