use fibre_autowire::{global, global_catalog, ClassInfo};
use std::sync::atomic::{AtomicUsize, Ordering};

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

// A global, thread-safe counter to generate unique IDs.
static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn main() {
  global_catalog().add(ClassInfo::class::<RequestTracker>("RequestTracker").build(|_| {
    println!("Constructing RequestTracker...");
    Ok(RequestTracker {
      id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
    })
  }));

  // --- Transient (the default) ---
  // Every `get` autowires a fresh object.
  println!("--- Resolving transients ---");
  let t1 = global().get_as::<RequestTracker>("RequestTracker").unwrap();
  let t2 = global().get_as::<RequestTracker>("RequestTracker").unwrap();
  println!("Transient 1 ID: {}, Transient 2 ID: {}", t1.id, t2.id);
  assert_ne!(t1.id, t2.id);

  // --- Singleton ---
  // Re-registering the name as a singleton replaces the entry; the object is
  // built on the first `get` and cached from then on.
  println!("\n--- Resolving singletons ---");
  global().singleton("RequestTracker");
  let s1 = global().get("RequestTracker").unwrap();
  let s2 = global().get("RequestTracker").unwrap();
  let id = s1.downcast_ref::<RequestTracker>().unwrap().id;
  println!("Singleton ID: {}", id);
  assert!(s1.ptr_eq(&s2), "Singleton instances should be identical");
  println!("Singleton instances are the same object, as expected.");
}
