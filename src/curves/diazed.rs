//! Digitized Diazed D2/D3/D4 gG time-current curves.
//!
//! Points are (fault current [A], trip time [s]) pairs read off the
//! manufacturer characteristic with Engauge. The data is ground truth:
//! it is kept exactly as digitized, including noisy samples.

/// Diazed D2/D3/D4 2 A, 49 digitized points.
pub const DIAZED_2A_POINTS: &[(f64, f64)] = &[
    (3.7646, 3485.2), (3.8537, 1944.7), (3.9, 1382.9),
    (3.9916, 573.7), (4.1814, 320.1), (4.24, 187.07),
    (4.3195, 70.74), (4.4209, 49.76), (4.4622, 22.644),
    (4.5248, 17.964), (4.567, 14.12), (4.6526, 10.996),
    (4.696, 7.248), (4.7571, 4.832), (4.7619, 5.697),
    (4.784, 3.2382), (4.8512, 2.2151), (4.8697, 2.6961),
    (4.9421, 1.6623), (4.9651, 1.1584), (5.0817, 0.7025),
    (5.1054, 0.9105), (5.1631, 0.5645), (5.5385, 0.32244),
    (5.7072, 0.2513), (6.082, 0.20218), (6.4097, 0.16566),
    (6.6832, 0.14551), (7.0811, 0.121), (7.4364, 0.1014),
    (8.1485, 0.08329), (8.789, 0.06872), (9.942, 0.05346),
    (10.732, 0.04406), (11.988, 0.035124), (12.862, 0.029861),
    (13.536, 0.025988), (14.456, 0.022544), (15.487, 0.019323),
    (16.682, 0.016205), (17.638, 0.01447), (18.476, 0.01262),
    (20.296, 0.010437), (21.635, 0.008958), (23.196, 0.007513),
    (24.763, 0.006699), (27.416, 0.005187), (29.861, 0.004401),
    (30.364, 0.0041533),
];

/// Diazed D2/D3/D4 4 A, 62 digitized points.
pub const DIAZED_4A_POINTS: &[(f64, f64)] = &[
    (7.4639, 3526.1), (7.5518, 2634.0), (7.8216, 1856.0),
    (7.96, 1487.0), (8.1485, 1110.7), (8.2444, 859.3),
    (8.3904, 619.8), (8.539, 479.4), (8.69, 366.6),
    (8.844, 267.53), (9.001, 216.84), (9.322, 156.41),
    (9.487, 102.76), (9.769, 63.69), (10.0, 45.94),
    (10.418, 23.348), (10.479, 19.147), (10.602, 14.986),
    (10.79, 11.729), (10.981, 9.507), (11.176, 8.074),
    (11.307, 6.469), (11.507, 5.063), (11.78, 3.6946),
    (11.918, 2.9599), (12.059, 2.211), (12.272, 1.6135),
    (12.417, 1.3544), (12.563, 1.0851), (12.711, 0.9003),
    (12.936, 0.6804), (13.165, 0.5515), (13.476, 0.41197),
    (14.122, 0.315), (14.456, 0.26135), (14.973, 0.21939),
    (15.508, 0.17992), (16.062, 0.14927), (16.538, 0.12531),
    (17.433, 0.10519), (18.161, 0.08933), (18.483, 0.07587),
    (20.06, 0.06295), (20.899, 0.05472), (22.029, 0.04488),
    (23.356, 0.038561), (24.908, 0.033134), (26.409, 0.028804),
    (28.164, 0.02475), (30.036, 0.021516), (32.032, 0.018062),
    (33.962, 0.01552), (35.589, 0.01365), (37.513, 0.011867),
    (40.954, 0.009961), (42.916, 0.008968), (44.71, 0.007617),
    (49.385, 0.006394), (50.554, 0.005961), (52.36, 0.005182),
    (56.168, 0.004505), (58.859, 0.0041519),
];

/// Diazed D2/D3/D4 6 A, 81 digitized points.
pub const DIAZED_6A_POINTS: &[(f64, f64)] = &[
    (11.046, 3326.3), (11.176, 2727.8), (11.307, 2211.0),
    (11.44, 1856.0), (11.643, 1370.3), (11.849, 1035.6),
    (12.059, 664.7), (12.094, 815.3), (12.489, 476.7),
    (12.711, 353.99), (12.898, 275.44), (13.165, 197.52),
    (13.398, 148.41), (13.635, 110.21), (13.836, 82.33),
    (13.917, 71.57), (14.081, 58.35), (14.33, 47.3),
    (14.499, 42.582), (14.627, 31.439), (14.842, 23.484),
    (15.149, 18.167), (15.327, 16.261), (15.599, 12.876),
    (15.736, 11.661), (15.875, 9.073), (16.203, 7.185),
    (16.442, 4.946), (16.587, 3.9625), (16.831, 3.2119),
    (17.029, 2.7598), (17.331, 2.1226), (17.484, 1.7714),
    (17.845, 1.5399), (17.95, 1.3703), (18.429, 1.0296),
    (18.7, 0.8795), (19.312, 0.657), (19.943, 0.5451),
    (20.296, 0.5024), (20.899, 0.40482), (21.394, 0.35399),
    (21.709, 0.32432), (22.288, 0.28693), (22.616, 0.26288),
    (23.287, 0.22721), (24.19, 0.19296), (25.349, 0.17171),
    (25.798, 0.15015), (26.564, 0.13677), (28.082, 0.11481),
    (29.17, 0.10276), (30.389, 0.08986), (31.567, 0.07766),
    (32.983, 0.06992), (34.362, 0.06295), (36.008, 0.05602),
    (37.513, 0.04985), (39.196, 0.042582), (40.954, 0.039472),
    (42.541, 0.035124), (44.972, 0.030714), (47.265, 0.027014),
    (48.81, 0.02475), (51.149, 0.022024), (54.072, 0.019599),
    (56.497, 0.01744), (59.552, 0.015886), (60.962, 0.014054),
    (63.883, 0.012876), (67.533, 0.011458), (70.976, 0.010437),
    (73.512, 0.009288), (78.628, 0.007934), (81.675, 0.007398),
    (85.59, 0.006699), (89.69, 0.005996), (94.26, 0.005305),
    (98.78, 0.004804), (103.21, 0.0042998), (105.34, 0.0041277),
];

/// Diazed D2/D3/D4 10 A, 88 digitized points.
pub const DIAZED_10A_POINTS: &[(f64, f64)] = &[
    (17.029, 3485.2), (17.4, 2724.3), (17.659, 2317.5),
    (18.055, 1990.6), (18.525, 1480.1), (19.009, 1169.8),
    (19.578, 884.7), (20.238, 684.0), (20.691, 532.8),
    (21.231, 427.34), (21.706, 355.6), (22.11, 274.93),
    (22.356, 237.35), (23.084, 184.16), (23.626, 147.19),
    (23.889, 118.93), (24.475, 105.19), (24.969, 83.57),
    (25.433, 71.09), (26.002, 58.73), (26.486, 49.59),
    (26.978, 42.498), (27.581, 33.344), (28.198, 27.141),
    (28.495, 23.622), (29.365, 19.641), (30.132, 16.956),
    (30.927, 13.492), (31.611, 12.003), (32.198, 10.286),
    (33.162, 8.311), (34.28, 6.865), (35.047, 5.84),
    (35.698, 5.042), (36.362, 4.352), (37.733, 3.6517),
    (38.571, 3.1729), (39.872, 2.6794), (40.914, 2.3473),
    (41.923, 2.135), (42.606, 1.8282), (43.399, 1.5899),
    (44.533, 1.4135), (46.037, 1.2194), (47.587, 1.0534),
    (49.192, 0.9161), (50.554, 0.8394), (52.18, 0.7294),
    (53.741, 0.6581), (55.349, 0.5851), (57.005, 0.5279),
    (57.498, 0.5024), (59.803, 0.436), (60.467, 0.39922),
    (63.435, 0.35233), (65.395, 0.2937), (67.536, 0.25874),
    (70.071, 0.22835), (72.168, 0.20152), (75.252, 0.17577),
    (77.975, 0.15241), (79.718, 0.13451), (81.802, 0.11871),
    (85.59, 0.10519), (90.74, 0.08137), (93.75, 0.07148),
    (96.2, 0.06402), (100.18, 0.05567), (103.21, 0.0487),
    (107.45, 0.042417), (111.07, 0.036618), (114.4, 0.033037),
    (118.77, 0.02847), (123.15, 0.024621), (127.77, 0.020488),
    (135.08, 0.017038), (138.05, 0.015724), (143.23, 0.013181),
    (147.52, 0.011892), (153.63, 0.010196), (157.63, 0.008994),
    (162.35, 0.007996), (169.07, 0.006954), (176.79, 0.006102),
    (178.02, 0.005496), (184.02, 0.004851), (189.53, 0.0042808),
    (193.05, 0.0040661),
];

/// Diazed D2/D3/D4 16 A, 100 digitized points.
pub const DIAZED_16A_POINTS: &[(f64, f64)] = &[
    (22.55, 3567.5), (23.28, 2953.7), (24.066, 2386.6),
    (24.475, 2037.6), (25.34, 1593.0), (25.433, 1385.3),
    (26.255, 1163.8), (27.278, 891.3), (28.094, 664.2),
    (29.042, 548.7), (30.021, 440.1), (30.243, 366.21),
    (31.033, 274.93), (32.08, 233.88), (33.177, 188.51),
    (34.154, 149.37), (35.589, 107.67), (36.229, 87.34),
    (37.294, 75.87), (38.147, 60.92), (39.0, 52.6),
    (40.007, 43.334), (41.065, 34.592), (42.138, 29.427),
    (42.916, 24.75), (44.206, 20.079), (45.361, 16.832),
    (46.205, 14.746), (47.238, 12.544), (48.831, 9.698),
    (50.554, 8.074), (51.796, 6.967), (53.346, 5.671),
    (54.74, 5.192), (56.168, 4.72), (57.639, 4.0144),
    (59.583, 3.3899), (61.14, 2.9698), (63.139, 2.7598),
    (65.333, 2.3473), (66.303, 2.0716), (69.335, 1.7714),
    (70.33, 1.6017), (72.435, 1.4135), (74.877, 1.2475),
    (77.118, 1.1338), (78.858, 1.0601), (80.902, 0.9716),
    (83.323, 0.8575), (85.5, 0.7294), (87.73, 0.6827),
    (90.74, 0.6055), (93.41, 0.5476), (96.2, 0.4833),
    (100.55, 0.4234), (104.42, 0.36234), (107.45, 0.33465),
    (111.89, 0.29752), (116.09, 0.26646), (119.57, 0.2369),
    (121.58, 0.22196), (125.9, 0.19425), (129.67, 0.17525),
    (133.05, 0.16164), (136.53, 0.14371), (139.9, 0.13283),
    (143.76, 0.11958), (146.43, 0.11029), (153.05, 0.09878),
    (156.48, 0.08978), (160.99, 0.07949), (166.59, 0.07148),
    (172.21, 0.06449), (179.34, 0.05609), (183.35, 0.05097),
    (187.44, 0.04757), (192.34, 0.043045), (201.07, 0.036803),
    (206.29, 0.033526), (210.91, 0.03115), (218.82, 0.02729),
    (222.89, 0.025356), (231.38, 0.022024), (237.31, 0.020189),
    (245.31, 0.017817), (253.58, 0.016075), (259.25, 0.014718),
    (269.39, 0.013181), (278.05, 0.011805), (284.27, 0.010808),
    (293.86, 0.009331), (301.54, 0.008606), (309.99, 0.008074),
    (318.67, 0.007214), (329.42, 0.006414), (338.03, 0.005829),
    (348.14, 0.005298), (356.72, 0.004832), (361.21, 0.00454),
    (370.65, 0.0041874),
];

/// Diazed D2/D3/D4 20 A, 100 digitized points.
pub const DIAZED_20A_POINTS: &[(f64, f64)] = &[
    (30.212, 3567.5), (30.934, 2955.3), (31.66, 2524.8),
    (32.409, 2037.6), (33.319, 1711.2), (33.944, 1382.9),
    (35.175, 1163.8), (36.432, 879.5), (37.074, 764.5),
    (37.594, 623.6), (39.081, 502.4), (40.119, 442.7),
    (40.872, 361.06), (42.417, 286.93), (43.213, 256.3),
    (44.024, 211.0), (45.501, 163.88), (47.199, 129.16),
    (48.308, 104.38), (49.385, 91.44), (50.839, 75.48),
    (51.552, 62.72), (52.976, 52.23), (54.002, 45.35),
    (55.271, 37.685), (56.569, 30.175), (58.167, 23.938),
    (60.253, 19.147), (61.786, 16.224), (63.531, 13.481),
    (66.165, 10.936), (67.798, 9.394), (70.151, 7.888),
    (71.351, 7.181), (73.367, 6.25), (75.791, 5.29),
    (78.858, 4.612), (80.725, 4.2006), (82.397, 3.7208),
    (86.31, 3.0917), (89.58, 2.6907), (91.81, 2.5138),
    (94.27, 2.2566), (97.84, 1.9458), (100.82, 1.8132),
    (103.45, 1.6019), (106.37, 1.4334), (111.94, 1.2475),
    (116.02, 1.0851), (119.46, 0.9625), (123.41, 0.8455),
    (128.08, 0.7427), (133.51, 0.6494), (136.68, 0.573),
    (141.85, 0.5127), (147.22, 0.4504), (153.63, 0.38862),
    (159.32, 0.33799), (163.06, 0.29689), (167.66, 0.26814),
    (172.4, 0.24899), (176.79, 0.23257), (179.76, 0.21272),
    (188.3, 0.18513), (194.52, 0.16875), (200.02, 0.15241),
    (203.44, 0.13918), (209.52, 0.12547), (215.44, 0.11437),
    (223.59, 0.1014), (229.91, 0.0899), (234.1, 0.08329),
    (241.96, 0.0747), (249.95, 0.06622), (259.41, 0.05763),
    (269.39, 0.04985), (275.55, 0.04658), (283.34, 0.041294),
    (295.43, 0.035607), (303.77, 0.032759), (309.99, 0.030535),
    (318.21, 0.02722), (328.72, 0.02391), (342.75, 0.021795),
    (350.8, 0.019684), (356.72, 0.018274), (369.19, 0.015908),
    (381.38, 0.014103), (392.16, 0.012737), (403.23, 0.011397),
    (410.49, 0.010936), (424.36, 0.009919), (434.33, 0.009042),
    (440.42, 0.008474), (452.87, 0.007583), (472.37, 0.006545),
    (483.28, 0.005905), (494.63, 0.005383), (508.61, 0.004862),
    (530.31, 0.00435),
];

/// Diazed D2/D3/D4 35 A, 110 digitized points.
pub const DIAZED_35A_POINTS: &[(f64, f64)] = &[
    (49.966, 3567.5), (51.194, 3038.5), (52.275, 2706.4),
    (53.132, 2366.3), (54.231, 2037.6), (55.399, 1664.3),
    (57.096, 1382.9), (58.859, 1163.8), (60.508, 890.7),
    (61.679, 782.7), (63.091, 635.2), (64.722, 542.7),
    (66.165, 447.0), (67.798, 369.51), (69.552, 323.08),
    (71.021, 274.74), (72.017, 246.98), (73.708, 207.13),
    (75.252, 175.77), (76.498, 151.88), (78.113, 132.18),
    (80.725, 100.39), (82.397, 84.35), (84.529, 69.44),
    (86.31, 61.28), (89.37, 50.92), (91.26, 42.903),
    (93.19, 37.511), (95.37, 31.752), (98.07, 26.628),
    (99.91, 23.068), (103.21, 20.535), (105.39, 17.964),
    (107.36, 15.562), (110.14, 13.233), (114.67, 12.006),
    (117.81, 10.163), (121.14, 8.764), (125.14, 7.662),
    (128.9, 7.019), (130.78, 6.164), (135.42, 5.439),
    (140.54, 4.734), (144.9, 4.1037), (147.57, 3.6695),
    (152.44, 3.2084), (156.02, 2.8709), (161.18, 2.5809),
    (164.8, 2.3992), (170.02, 2.0192), (176.04, 1.7251),
    (180.17, 1.5871), (187.44, 1.4358), (190.5, 1.2591),
    (197.25, 1.1214), (203.44, 1.0117), (208.55, 0.9021),
    (214.44, 0.811), (220.5, 0.7392), (225.68, 0.6707),
    (234.1, 0.6055), (240.28, 0.5321), (247.07, 0.4739),
    (252.87, 0.436), (259.41, 0.39931), (269.39, 0.36234),
    (274.28, 0.3227), (278.77, 0.30526), (286.65, 0.27569),
    (294.74, 0.25014), (306.39, 0.21684), (313.81, 0.19753),
    (320.44, 0.18173), (329.49, 0.16413), (340.37, 0.14686),
    (352.57, 0.12977), (359.04, 0.11869), (368.33, 0.1062),
    (380.5, 0.09771), (389.43, 0.08948), (405.72, 0.07766),
    (415.59, 0.07001), (428.32, 0.06149), (443.5, 0.05377),
    (453.92, 0.04993), (466.87, 0.04648), (479.93, 0.039425),
    (492.34, 0.036272), (509.79, 0.032158), (531.0, 0.027814),
    (544.03, 0.025394), (558.1, 0.022934), (571.21, 0.021002),
    (592.83, 0.018793), (611.04, 0.016645), (622.45, 0.014978),
    (637.06, 0.013653), (655.06, 0.012446), (675.13, 0.011292),
    (687.79, 0.010294), (703.14, 0.009961), (718.81, 0.009),
    (744.28, 0.008128), (760.0, 0.007307), (783.28, 0.006448),
    (809.13, 0.005824), (832.02, 0.005235), (853.5, 0.004728),
    (873.6, 0.0042902), (883.8, 0.004115),
];

/// Diazed D2/D3/D4 50 A, 120 digitized points.
pub const DIAZED_50A_POINTS: &[(f64, f64)] = &[
    (72.657, 3567.5), (73.727, 3249.6), (74.813, 2841.5),
    (77.713, 2455.9), (79.786, 2037.6), (82.636, 1730.5),
    (84.593, 1419.1), (85.84, 1323.2), (87.61, 1191.3),
    (89.95, 1017.7), (92.35, 869.3), (94.54, 747.0),
    (96.49, 638.1), (98.78, 564.5), (100.82, 514.2),
    (103.51, 431.65), (105.96, 375.25), (108.79, 316.84),
    (110.71, 293.7), (114.0, 238.06), (116.7, 213.08),
    (118.77, 183.09), (121.58, 167.75), (123.73, 143.3),
    (125.19, 128.26), (127.78, 113.47), (131.95, 98.07),
    (135.87, 81.85), (138.68, 69.51), (141.55, 61.14),
    (144.9, 56.02), (149.2, 47.02), (152.73, 39.935),
    (156.81, 35.124), (159.12, 31.994), (162.89, 28.305),
    (167.72, 24.606), (173.21, 21.642), (176.79, 18.705),
    (182.57, 16.072), (185.8, 14.769), (188.81, 13.61),
    (191.88, 12.325), (195.85, 11.129), (201.07, 9.731),
    (205.23, 8.968), (209.17, 8.193), (214.75, 7.081),
    (220.15, 6.338), (226.03, 5.689), (230.03, 5.167),
    (234.44, 4.666), (240.35, 4.0325), (249.3, 3.5261),
    (254.08, 3.3263), (258.58, 2.8332), (265.48, 2.5359),
    (272.16, 2.2765), (278.2, 2.0796), (285.62, 1.9447),
    (289.83, 1.6906), (296.25, 1.5132), (302.82, 1.3743),
    (309.54, 1.2555), (321.07, 1.137), (327.23, 0.9942),
    (335.47, 0.9029), (340.41, 0.8346), (350.0, 0.7298),
    (360.92, 0.6647), (368.39, 0.5846), (374.91, 0.5467),
    (383.22, 0.4951), (388.87, 0.4589), (394.02, 0.42914),
    (405.72, 0.3978), (412.9, 0.35919), (425.16, 0.31684),
    (436.5, 0.28113), (446.18, 0.25607), (456.07, 0.23257),
    (470.3, 0.20396), (484.26, 0.18309), (493.55, 0.16532),
    (508.95, 0.14711), (518.72, 0.13597), (533.33, 0.11414),
    (549.97, 0.10519), (565.46, 0.08986), (583.1, 0.07949),
    (595.16, 0.07033), (610.14, 0.0624), (633.79, 0.05651),
    (645.01, 0.05087), (655.47, 0.04648), (665.13, 0.042211),
    (679.88, 0.038674), (695.98, 0.035227), (714.55, 0.031715),
    (726.13, 0.029399), (745.5, 0.027814), (754.28, 0.025114),
    (771.01, 0.022479), (786.96, 0.020535), (806.77, 0.018114),
    (824.66, 0.016791), (838.04, 0.016261), (851.6, 0.014344),
    (876.9, 0.012653), (900.3, 0.01126), (931.1, 0.010196),
    (949.0, 0.009073), (981.4, 0.007888), (1009.1, 0.006999),
    (1024.0, 0.006412), (1046.7, 0.005961), (1063.6, 0.00543),
    (1084.1, 0.00499), (1104.9, 0.004545), (1131.0, 0.0041884),
];

/// Diazed D2/D3/D4 63 A, 128 digitized points.
pub const DIAZED_63A_POINTS: &[(f64, f64)] = &[
    (90.74, 3567.5), (92.32, 3066.8), (93.62, 2757.0),
    (96.04, 2478.4), (99.65, 2037.6), (102.25, 1703.3),
    (104.66, 1421.8), (107.86, 1248.9), (109.43, 1163.8),
    (112.99, 932.9), (114.31, 838.7), (117.38, 729.8),
    (119.46, 650.1), (122.84, 560.6), (125.14, 481.1),
    (128.9, 416.8), (132.0, 359.39), (134.17, 314.23),
    (137.96, 273.47), (139.9, 238.06), (143.84, 208.09),
    (146.54, 180.27), (149.98, 153.29), (153.63, 139.18),
    (156.38, 117.19), (160.43, 99.65), (164.58, 87.94),
    (168.7, 79.49), (172.0, 66.61), (176.45, 55.6),
    (183.1, 45.4), (187.71, 40.051), (192.16, 35.954),
    (197.86, 31.439), (204.03, 26.857), (208.25, 23.622),
    (213.81, 21.642), (219.51, 19.035), (224.71, 17.138),
    (230.37, 15.565), (236.86, 14.136), (239.64, 12.952),
    (246.4, 11.525), (253.71, 10.078), (258.96, 9.234),
    (266.25, 8.265), (271.97, 7.526), (277.03, 6.916),
    (283.75, 6.309), (291.7, 5.588), (296.58, 5.192),
    (302.82, 4.832), (311.13, 4.2732), (317.5, 3.8553),
    (328.21, 3.415), (336.17, 3.1613), (344.42, 2.8917),
    (349.43, 2.5827), (358.56, 2.3216), (365.9, 2.1178),
    (372.71, 1.9895), (380.34, 1.8215), (391.72, 1.6906),
    (402.7, 1.4991), (409.43, 1.3776), (421.68, 1.2429),
    (429.52, 1.1421), (445.53, 1.0117), (458.14, 0.9128),
    (473.59, 0.7909), (487.76, 0.6903), (506.72, 0.6055),
    (513.58, 0.5517), (528.95, 0.5126), (540.78, 0.4641),
    (554.91, 0.40663), (564.19, 0.37642), (576.32, 0.35399),
    (590.79, 0.32258), (598.46, 0.30193), (615.23, 0.26744),
    (630.14, 0.24576), (645.42, 0.23003), (663.19, 0.21184),
    (674.6, 0.18793), (692.23, 0.16769), (706.41, 0.15353),
    (727.54, 0.13801), (754.28, 0.12678), (768.89, 0.11358),
    (784.64, 0.10399), (800.7, 0.09556), (815.6, 0.08879),
    (835.37, 0.07982), (857.9, 0.07412), (878.0, 0.06715),
    (899.3, 0.05926), (921.1, 0.05506), (941.7, 0.0506),
    (957.4, 0.04667), (975.7, 0.04436), (993.3, 0.04029),
    (1019.3, 0.036753), (1042.1, 0.033526), (1065.4, 0.031036),
    (1089.2, 0.028104), (1109.7, 0.025933), (1140.6, 0.023559),
    (1179.0, 0.021099), (1201.0, 0.019318), (1239.2, 0.017111),
    (1262.1, 0.01552), (1300.0, 0.01398), (1326.6, 0.012941),
    (1361.3, 0.01159), (1399.4, 0.010304), (1452.4, 0.009288),
    (1473.5, 0.00848), (1506.5, 0.007651), (1537.3, 0.007109),
    (1574.6, 0.006581), (1609.8, 0.006025), (1630.7, 0.00566),
    (1651.9, 0.00543), (1682.6, 0.005014), (1707.6, 0.004745),
    (1749.0, 0.0042965), (1765.1, 0.0040661),
];

/// Normalized gG curve: 60 points of (multiple of rated current, trip
/// time [s]), shared by fuse families without a per-rating digitization.
pub const GG_CURVE_60: &[(f64, f64)] = &[
    (3.0, 1.50), (3.1346, 1.33), (3.27, 1.17),
    (3.414, 1.04), (3.565, 0.93), (3.723, 0.835),
    (3.888, 0.75), (4.059, 0.67), (4.238, 0.60),
    (4.424, 0.54), (4.617, 0.49), (4.818, 0.445),
    (5.027, 0.405), (5.244, 0.37), (5.47, 0.335),
    (5.704, 0.305), (5.947, 0.28), (6.2, 0.255),
    (6.462, 0.235), (6.734, 0.215), (7.017, 0.20),
    (7.31, 0.185), (7.614, 0.17), (7.93, 0.158),
    (8.258, 0.146), (8.598, 0.135), (8.951, 0.125),
    (9.318, 0.116), (9.698, 0.108), (10.093, 0.10),
    (10.504, 0.094), (10.93, 0.088), (11.372, 0.082),
    (11.831, 0.077), (12.307, 0.072), (12.801, 0.068),
    (13.314, 0.064), (13.846, 0.060), (14.398, 0.057),
    (14.97, 0.054), (15.563, 0.051), (16.178, 0.048),
    (16.815, 0.0455), (17.475, 0.043), (18.159, 0.0405),
    (18.868, 0.0385), (19.602, 0.0365), (20.363, 0.0345),
    (21.151, 0.033), (21.967, 0.0315), (22.812, 0.030),
    (23.687, 0.0285), (24.592, 0.027), (25.529, 0.026),
    (26.498, 0.025), (27.501, 0.024), (28.539, 0.023),
    (29.612, 0.022), (30.722, 0.021), (31.87, 0.020),
];
