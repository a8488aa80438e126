pub mod guest_service;
