#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandLineConfig {
    pub matrix: String,
    pub command: String,
    pub start: usize,
    pub goal: usize,
    pub output: String,
}

impl CommandLineConfig {
    pub fn from_args(args: &[&str]) -> Result<Self, String> {
        let mut matrix = String::from("matrix.txt");
        let mut command = String::from("dump");
        let mut start = 0usize;
        let mut goal = 0usize;
        let mut output = String::from("graph.bin");
        let mut iter = args.iter().skip(1);
        while let Some(arg) = iter.next() {
            match *arg {
                "--matrix" => {
                    matrix = iter
                        .next()
                        .ok_or_else(|| "--matrix requires a value".to_string())?
                        .to_string();
                }
                "--command" => {
                    command = iter
                        .next()
                        .ok_or_else(|| "--command requires a value".to_string())?
                        .to_string();
                }
                "--start" => {
                    start = parse_index(iter.next().copied(), "--start")?;
                }
                "--goal" => {
                    goal = parse_index(iter.next().copied(), "--goal")?;
                }
                "--out" => {
                    output = iter
                        .next()
                        .ok_or_else(|| "--out requires a value".to_string())?
                        .to_string();
                }
                other if other.starts_with('-') => {
                    return Err(format!("unknown flag {other}"));
                }
                _ => {
                    command = arg.to_string();
                }
            }
        }
        Ok(Self {
            matrix,
            command,
            start,
            goal,
            output,
        })
    }

    pub fn help() -> &'static str {
        "Usage: gridgraph [--matrix PATH] [--command dump|path|sum|save|export] \
         [--start N] [--goal N] [--out PATH]\n"
    }
}

fn parse_index(arg: Option<&str>, flag: &str) -> Result<usize, String> {
    let raw = arg.ok_or_else(|| format!("{flag} requires a value"))?;
    raw.parse()
        .map_err(|_| format!("{flag} requires a vertex index, got {raw}"))
}
