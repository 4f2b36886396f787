//! Project constants for the fixbrot checkout.
//!
//! The amalgamation is normally run from the `app/m5` directory of the
//! repository, so the include directory is addressed relative to it. A bare
//! invocation of the binary uses exactly these values.

/// Directory against which every include directive is resolved.
pub const INCLUDE_DIR: &str = "../../lib/include";

/// Entry header, relative to [`INCLUDE_DIR`].
pub const ROOT_HEADER: &str = "fixbrot/fixbrot.hpp";

/// Destination of the amalgamated header.
pub const OUTPUT_HEADER: &str = "Fixbrot/Fixbrot.h";

/// Include-guard macro wrapped around the output file.
pub const GUARD_MACRO: &str = "FIXBROT_H";
