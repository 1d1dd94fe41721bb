mod references_tests;
mod unexpected_tests;
