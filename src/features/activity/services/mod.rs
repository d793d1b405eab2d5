mod notifier_service;

pub use notifier_service::ActivityNotifier;
