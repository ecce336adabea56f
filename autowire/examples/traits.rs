use fibre_autowire::{autowire, global, global_catalog, ClassInfo, Constructor, Parameter};
use std::sync::Arc;

// 1. Define the abstraction (the trait)
trait Logger: Send + Sync {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation
struct ConsoleLogger;
impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

// 3. Define a service that depends on the abstraction
struct ReportService {
  logger: Arc<dyn Logger>,
}

impl ReportService {
  fn generate_report(&self) {
    self.logger.log("Starting report generation.");
    self.logger.log("Finished report generation.");
  }
}

fn main() {
  // --- Describing the classes ---
  global_catalog()
    .add(ClassInfo::interface("Logger"))
    .add(
      ClassInfo::class::<ConsoleLogger>("ConsoleLogger")
        .implements::<dyn Logger>(|c: Arc<ConsoleLogger>| -> Arc<dyn Logger> { c })
        .build(|_| Ok(ConsoleLogger)),
    )
    .add(
      ClassInfo::class::<ReportService>("ReportService")
        .constructor(Constructor::new().param(Parameter::class("logger", "Logger")))
        .build(|args| Ok(ReportService { logger: args.view(0)? })),
    );

  // --- Wiring ---
  // Every `Logger` parameter now receives the one ConsoleLogger.
  global().singleton("ConsoleLogger");
  global().bind("Logger", "ConsoleLogger");

  // --- Resolution and Usage ---
  // No factory was written for ReportService: its logger is autowired.
  println!("Resolving the high-level service...");
  let report_service = autowire!(ReportService, "ReportService");

  println!("Using the service...");
  report_service.generate_report();
}
