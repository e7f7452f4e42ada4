mod package_json;

pub use package_json::PackageJsonFile;
