//! Integration tests for logging from the reflection pass
//!
//! These tests replace the global logger, so they run serially.
//! No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests


use std::sync::{Arc, Mutex};
use galaxy_3d_reflection::galaxy3d::Engine;
use galaxy_3d_reflection::galaxy3d::camera::{Camera, CameraRole};
use galaxy_3d_reflection::galaxy3d::config::ReflectionConfig;
use galaxy_3d_reflection::galaxy3d::log::{Logger, LogEntry, LogSeverity};
use galaxy_3d_reflection::galaxy3d::pipeline::CameraEventBus;
use galaxy_3d_reflection::galaxy3d::reflection::PlanarReflection;
use galaxy_3d_reflection::galaxy3d::scene::{AABB, ActivationVolume, SurfaceId, SurfaceTargetList};
use galaxy_3d_reflection::glam::Vec3;
use mock_host::MockHost;
use serial_test::serial;

// ============================================================================
// TEST LOGGER IMPLEMENTATION
// ============================================================================

/// Test logger that captures log entries for verification
struct TestLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogger {
    fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }
}

impl Logger for TestLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn restore_logging() {
    Engine::reset_logger();
    Engine::set_log_level(LogSeverity::Info);
}

fn has_entry(entries: &[LogEntry], severity: LogSeverity, source: &str, needle: &str) -> bool {
    entries.iter().any(|entry| {
        entry.severity == severity && entry.source == source && entry.message.contains(needle)
    })
}

fn setup() -> (Arc<Mutex<PlanarReflection>>, CameraEventBus, Camera) {
    let volume = ActivationVolume::new(AABB::from_center_half_extents(Vec3::ZERO, Vec3::splat(20.0)));
    let reflection = Arc::new(Mutex::new(
        PlanarReflection::new(ReflectionConfig::default(), volume)
            .with_targets(SurfaceTargetList::from(vec![Some(SurfaceId(1)), Some(SurfaceId(2))])),
    ));
    let mut bus = CameraEventBus::new();
    PlanarReflection::enable(&reflection, &mut bus).unwrap();

    let mut camera = Camera::new("player", CameraRole::Normal);
    camera.look_to(Vec3::new(0.0, 5.0, 0.0), Vec3::NEG_Y, Vec3::NEG_Z);
    (reflection, bus, camera)
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
#[serial]
fn test_integration_trace_of_a_frame() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_log_level(LogSeverity::Trace);

    let (reflection, mut bus, camera) = setup();
    let mut host = MockHost::new(&[SurfaceId(1)]);
    host.render_camera(&bus, 0, &camera);
    reflection.lock().unwrap().disable(&mut bus, &mut host);

    restore_logging();

    let captured = entries.lock().unwrap();
    let synthesizer = "galaxy3d::reflection::Synthesizer";
    assert!(has_entry(&captured, LogSeverity::Debug, synthesizer, "Created virtual camera"));
    assert!(has_entry(&captured, LogSeverity::Trace, synthesizer, "Allocated target"));
    assert!(has_entry(&captured, LogSeverity::Trace, synthesizer, "Releasing target"));
    assert!(has_entry(&captured, LogSeverity::Debug, synthesizer, "Surface 2 has no '_ReflectionTex' input"));
    assert!(has_entry(&captured, LogSeverity::Debug, synthesizer, "Destroyed virtual camera"));
    assert!(has_entry(&captured, LogSeverity::Trace, "galaxy3d::pipeline::EventBus", "re-entered observer"));
    assert!(has_entry(&captured, LogSeverity::Debug, "galaxy3d::reflection::PlanarReflection", "Disabled"));
}

#[test]
#[serial]
fn test_integration_gate_skip_is_traced() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_log_level(LogSeverity::Trace);

    let (_reflection, bus, mut camera) = setup();
    camera.set_position(Vec3::new(0.0, 5.0, 500.0));
    let mut host = MockHost::new(&[]);
    host.render_camera(&bus, 0, &camera);

    restore_logging();

    let captured = entries.lock().unwrap();
    assert!(has_entry(&captured, LogSeverity::Trace, "galaxy3d::reflection::Gate", "OutsideVolume"));
}

#[test]
#[serial]
fn test_integration_default_level_is_quiet() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_log_level(LogSeverity::Info);

    let (_reflection, bus, camera) = setup();
    let mut host = MockHost::new(&[SurfaceId(1), SurfaceId(2)]);
    host.render_camera(&bus, 0, &camera);

    restore_logging();

    assert!(entries.lock().unwrap().is_empty());
    assert_eq!(host.published.len(), 2);
}

#[test]
#[serial]
fn test_integration_failed_reflection_is_logged() {
    let (test_logger, entries) = TestLogger::new();
    Engine::set_logger(test_logger);
    Engine::set_log_level(LogSeverity::Info);

    let (_reflection, bus, camera) = setup();
    let mut host = MockHost::new(&[SurfaceId(1)]);
    host.fail_allocation = true;
    host.render_camera(&bus, 0, &camera);

    restore_logging();

    let captured = entries.lock().unwrap();
    let failure = captured
        .iter()
        .find(|entry| entry.source == "galaxy3d::pipeline::EventBus")
        .expect("observer failure logged");
    assert_eq!(failure.severity, LogSeverity::Error);
    assert!(failure.message.contains("Out of GPU memory"));
    assert!(failure.file.is_some());
    assert!(failure.line.is_some());
}
