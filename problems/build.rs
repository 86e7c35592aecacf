use std::{
    collections::HashSet,
    env,
    error::Error,
    fmt::Write as _,
    fs,
    path::PathBuf,
    process,
};

struct ProblemDef {
    /// The code that users know this as. Codes are stable between releases
    /// so that documentation and bug reports keep referring to the same thing.
    code: String,
    /// The variant name of the problem in the generated enumeration.
    name: String,
    /// The fixed message for the problem.
    message: String,
}

fn read_definitions(src: &[u8]) -> Result<Vec<ProblemDef>, Box<dyn Error>> {
    let mut defs = vec![];
    let mut seen = HashSet::new();

    let mut rdr = csv::Reader::from_reader(src);
    for result in rdr.records() {
        let record = result?;
        let column = |idx: usize| {
            record
                .get(idx)
                .map(str::trim)
                .ok_or_else(|| format!("Record {:?} is not valid at column {}", record, idx))
        };

        let code = column(0)?;
        let name = column(1)?;
        let message = column(2)?;

        if !code.starts_with('P') || code.len() != 5 {
            return Err(format!("Problem code '{}' must have the form PNNNN", code).into());
        }
        if !seen.insert(code.to_string()) {
            return Err(format!("Problem code '{}' is defined more than once", code).into());
        }

        defs.push(ProblemDef {
            code: code.to_string(),
            name: name.to_string(),
            message: message.to_string(),
        });
    }

    Ok(defs)
}

fn render(defs: &[ProblemDef]) -> Result<String, std::fmt::Error> {
    let mut out = String::new();

    writeln!(out, "#[derive(Clone, Copy, Debug, PartialEq, Eq)]")?;
    writeln!(out, "pub enum Problem {{")?;
    for def in defs {
        writeln!(out, "    {},", def.name)?;
    }
    writeln!(out, "}}\n")?;

    writeln!(out, "impl Problem {{")?;

    writeln!(out, "    /// Returns the code for the particular problem as a string.")?;
    writeln!(out, "    pub fn code(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for def in defs {
        writeln!(out, "            Problem::{} => {:?},", def.name, def.code)?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}\n")?;

    writeln!(out, "    /// Returns the message for the particular problem as a string.")?;
    writeln!(out, "    /// The message is constant and does not depend on the particular instance of the problem.")?;
    writeln!(out, "    pub fn message(&self) -> &'static str {{")?;
    writeln!(out, "        match self {{")?;
    for def in defs {
        writeln!(out, "            Problem::{} => {:?},", def.name, def.message)?;
    }
    writeln!(out, "        }}")?;
    writeln!(out, "    }}")?;

    writeln!(out, "}}")?;

    Ok(out)
}

fn create_problems() -> Result<(), Box<dyn Error>> {
    // Rerun this build script when the definitions change.
    println!("cargo:rerun-if-changed=resources/problem-codes.csv");

    let mut src_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    src_path.push("resources");
    src_path.push("problem-codes.csv");

    let src = fs::read(&src_path)
        .map_err(|e| format!("Unable to read '{}': {}", src_path.display(), e))?;
    let defs = read_definitions(&src)?;

    let mut out_path = PathBuf::from(env::var("OUT_DIR")?);
    fs::create_dir_all(&out_path)
        .map_err(|e| format!("Unable to create directory 'problems': {}", e))?;
    out_path.push("problems.rs");

    fs::write(&out_path, render(&defs)?)
        .map_err(|e| format!("Unable to create 'problems.rs': {}", e))?;

    Ok(())
}

fn main() {
    if let Err(err) = create_problems() {
        println!("problem generating problems.rs: {}", err);
        process::exit(1);
    }
}
