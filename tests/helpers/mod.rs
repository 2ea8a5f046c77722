pub mod stub_reasoner;
