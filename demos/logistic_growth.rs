// Logistic population growth

use ode1d::*;

use std::convert::Infallible;
use std::{fs, fs::File, io::BufWriter, io::Write, path::Path};

fn main() {
    // Define problem specific constants
    let system = LogisticGrowth {
        rate: 0.8,
        capacity: 100.0,
    };

    // Create stepper and integrate
    let mut stepper = match Euler::new(system, 0.05, 401, 0.0) {
        Ok(stepper) => stepper,
        Err(e) => {
            println!("Invalid configuration: {}", e);
            return;
        }
    };
    let res = match stepper.solve(2.0) {
        Ok(res) => res,
        Err(e) => match e {},
    };

    // Handle result
    println!("{}", res.stats);
    if let Some((t, y)) = res.last() {
        println!("y({}) = {}", t, y);
    }
    let path = Path::new("./outputs/logistic_euler.dat");
    save(&res, path);
    println!("Results saved in: {:?}", path);

    #[cfg(feature = "plot")]
    {
        let mut plotter = plot::FilePlotter::new("./outputs/logistic_euler.png");
        match stepper.plot_solution(&mut plotter, true) {
            Ok((figure, _)) => println!("Plot saved in: {:?}", figure.path),
            Err(e) => println!("Could not plot. Error: {}", e),
        }
    }
}

struct LogisticGrowth {
    rate: f64,
    capacity: f64,
}

impl System1D for LogisticGrowth {
    type Error = Infallible;

    fn system(&self, _t: f64, y: f64) -> Result<f64, Infallible> {
        Ok(self.rate * y * (1.0 - y / self.capacity))
    }
}

pub fn save(res: &Solution, filename: &Path) {
    if let Some(dir) = filename.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            println!("Could not create directory. Error: {:?}", e);
            return;
        }
    }

    // Create or open file
    let file = match File::create(filename) {
        Err(e) => {
            println!("Could not open file. Error: {:?}", e);
            return;
        }
        Ok(buf) => buf,
    };
    let mut buf = BufWriter::new(file);

    // Write time and value in a csv format
    for (t, y) in res.iter() {
        if let Err(e) = writeln!(buf, "{}, {}", t, y) {
            println!("Could not write to file. Error: {:?}", e);
            return;
        }
    }
    if let Err(e) = buf.flush() {
        println!("Could not write to file. Error: {:?}", e);
    }
}
