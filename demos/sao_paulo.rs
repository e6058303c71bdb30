use qtty::Degrees;
use sunpos::{CivilDate, Observer, Sexagesimal, SunPosition};

fn main() -> Result<(), sunpos::Error> {
    env_logger::Builder::from_default_env().init();

    // 313.3668° E is São Paulo's west longitude written east-positive.
    let observer = Observer::new(Degrees::new(313.3668), Degrees::new(-23.5666))?;
    let date = CivilDate::try_new(2012, 10, 12.0)?.with_time(0.0, 0.0, 0.0)?;

    let sun = SunPosition::at_civil(date, &observer);
    let solar = &sun.solar;
    let horizon = &sun.horizontal;

    println!("JD (UT):  {:.6}", sun.ut.value());
    println!("JD (TT):  {:.6}  ΔT = {:.3} s", sun.tt.value(), sun.delta_t.value());
    println!(
        "RA:       {}  ({:.6} h)",
        Sexagesimal::from_hours(solar.right_ascension),
        solar.right_ascension.value()
    );
    println!(
        "Dec:      {}  ({:.6}°)",
        Sexagesimal::from_degrees(solar.declination),
        solar.declination.value()
    );
    println!("Distance: {:.7} au", solar.distance.value());
    println!("EoT:      {:+.2} min", solar.equation_of_time.value());
    println!("LST:      {}", Sexagesimal::from_hours(horizon.local_sidereal_time));
    println!("Azimuth:  {:.4}°", horizon.azimuth.value());
    println!(
        "Altitude: {:.4}° (apparent {:.4}°)",
        horizon.altitude.value(),
        horizon.apparent_altitude().value()
    );

    Ok(())
}
