// Pipeline
tr!(STARTING_PIPELINE, "Starting the `{}` Pipeline...");
tr!(STARTING_ACTION, "Action");
tr!(DONE, " done");
tr!(GOT_ERROR, " got an error!");
tr!(BUILD_COMPLETED, "Build completed!");
tr!(ERROR_OCCURED, "An error occured");

// Actions
tr!(ACTION_BUNDLE, "Bundle");
tr!(ACTION_COPY_ASSETS, "Copy assets");

// Bundler
tr!(EXECUTING, "Executing");
tr!(ERRORS, "Errors:");

// Configuration
tr!(CONFIG_EMPTY_ENTRY, "the entry point is not specified");
tr!(CONFIG_EMPTY_OUTFILE, "the output file is not specified");
tr!(CONFIG_EMPTY_TARGET, "the target list is empty");
tr!(CONFIG_BAD_DEFINE_KEY, "`{}` can't be used as a define key");
tr!(CONFIG_BAD_DEFINE_VALUE, "`{1}` can't be substituted for `{2}`: use a JSON literal or an identifier");
tr!(CONFIG_EMPTY_ASSET_PATH, "an asset has an empty source or destination path");
tr!(CONFIG_ASSET_ONTO_ITSELF, "the asset `{}` would be copied onto itself");
tr!(CONFIG_ASSET_OVER_BUNDLE, "the asset destination `{}` is the bundle output file");
tr!(CONFIG_READ_FAILED, "Can't read the options file `{}`");
