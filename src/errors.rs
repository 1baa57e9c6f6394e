use std::path::PathBuf;

error_chain! {
    errors {
        MissingExtension(path: PathBuf) {
            description("input path has no file extension")
            display("input path has no file extension: '{}'", path.display())
        }

        UnsupportedFormat(ext: String) {
            description("no codec for file extension")
            display("no codec for file extension: '{}'", ext)
        }

        BufferSize(expected: usize, actual: usize) {
            description("pixel buffer does not match image size")
            display("pixel buffer holds {} pixels, image needs {}", actual, expected)
        }

        NothingProcessed {
            description("no kernel has been applied")
            display("write called before any kernel was applied")
        }
    }
}
