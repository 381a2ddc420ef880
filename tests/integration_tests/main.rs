mod properties_test;
mod workflow_test;
